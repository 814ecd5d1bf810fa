use crate::error::{ExportError, Result};
use log::debug;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderValue};

pub const BOOST_API_BASE: &str = "https://boostnote.io/api/";

/// HTTP client for the Boost Note REST API.
/// The bearer credential is fixed at construction and sent on every request.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    api_base: String,
    auth_header: HeaderValue,
}

impl HttpClient {
    pub fn new(api_base: &str, token: &str) -> Result<Self> {
        let mut auth_header = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| ExportError::Config(format!("Token is not a valid header value: {}", e)))?;
        auth_header.set_sensitive(true);

        let api_base = if api_base.ends_with('/') {
            api_base.to_string()
        } else {
            format!("{}/", api_base)
        };

        Ok(Self {
            client: Client::new(),
            api_base,
            auth_header,
        })
    }

    /// Get full URL by prepending the API base if needed
    pub fn get_full_url(&self, url: &str) -> String {
        if url.starts_with("http") {
            url.to_string()
        } else {
            format!("{}{}", self.api_base, url.trim_start_matches('/'))
        }
    }

    /// Make an authorized GET request and decode the JSON body as `T`
    pub async fn get<T>(&self, url: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned + std::fmt::Debug,
    {
        let url = self.get_full_url(url);
        debug!("Getting url: {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.auth_header.clone())
            .send()
            .await
            .map_err(|e| ExportError::remote(&url, format!("Failed to get response: {}", e)))?
            .error_for_status()
            .map_err(|e| ExportError::remote(&url, format!("Not a success status: {}", e)))?;

        response
            .json::<T>()
            .await
            .map_err(|e| ExportError::remote(&url, format!("Failed to deserialize response: {}", e)))
    }
}
