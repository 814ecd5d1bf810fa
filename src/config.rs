// Configuration for an export run: credential, output root and API location.

use crate::boost_service::http_client::BOOST_API_BASE;
use crate::error::{ExportError, Result};
use log::{debug, warn};
use std::fmt;
use std::path::PathBuf;

pub const TOKEN_VAR: &str = "BOOST_TOKEN";
pub const BASE_DIR_VAR: &str = "BASE_DIR";
pub const API_URL_VAR: &str = "BOOST_API_URL";
pub const DEFAULT_OUTPUT_DIR: &str = "./backup";

pub struct ExportConfig {
    /// Bearer token presented on every API request
    pub token: String,
    /// Root of the exported tree, always absolute
    pub output_dir: PathBuf,
    /// Base URL of the REST API, ending with `/`
    pub api_base: String,
}

impl fmt::Debug for ExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportConfig")
            .field("token", &"<redacted>")
            .field("output_dir", &self.output_dir)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl ExportConfig {
    /// Build the configuration from the process environment, after loading a
    /// `.env` file from the working directory if one exists. Explicit
    /// arguments win over environment variables.
    pub fn from_env(output_dir: Option<PathBuf>, api_url: Option<String>) -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => warn!("Ignoring unreadable .env file: {}", e),
        }
        Self::resolve(output_dir, api_url, |key| std::env::var(key).ok())
    }

    pub fn resolve<F>(output_dir: Option<PathBuf>, api_url: Option<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                ExportError::Config(format!(
                    "A token is required, please set {} in your environment",
                    TOKEN_VAR
                ))
            })?;

        let output_dir = output_dir
            .or_else(|| lookup(BASE_DIR_VAR).filter(|d| !d.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        let output_dir =
            std::path::absolute(&output_dir).map_err(|e| ExportError::filesystem(&output_dir, e))?;

        let mut api_base = api_url
            .or_else(|| lookup(API_URL_VAR).filter(|u| !u.is_empty()))
            .unwrap_or_else(|| BOOST_API_BASE.to_string());
        if !api_base.ends_with('/') {
            api_base.push('/');
        }

        Ok(Self {
            token,
            output_dir,
            api_base,
        })
    }
}
