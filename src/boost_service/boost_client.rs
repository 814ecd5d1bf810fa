use crate::boost_service::boost_models::{
    DocResponse, DocumentNode, FolderListResponse, FolderNode, FolderResponse,
};
use crate::boost_service::http_client::HttpClient;
use crate::error::Result;
use async_trait::async_trait;
use log::debug;

const FOLDERS_URI: &str = "folders";
const DOCS_URI: &str = "docs";

/// Read-only access to the remote folder/document graph
#[async_trait]
pub trait BoostClientTrait: Send + Sync {
    async fn list_top_folders(&self) -> Result<Vec<FolderNode>>;
    async fn fetch_folder(&self, folder_id: &str) -> Result<FolderNode>;
    async fn fetch_document(&self, doc_id: &str) -> Result<DocumentNode>;
}

/// Boost Note API client
#[derive(Clone)]
pub struct BoostClient {
    http_client: HttpClient,
}

impl BoostClient {
    pub fn new(api_base: &str, token: &str) -> Result<Self> {
        Ok(Self {
            http_client: HttpClient::new(api_base, token)?,
        })
    }

    /// Get the top-level folders of the workspace
    pub async fn list_top_folders(&self) -> Result<Vec<FolderNode>> {
        let response: FolderListResponse = self.http_client.get(FOLDERS_URI).await?;
        debug!("Listed {} top-level folders", response.folders.len());
        Ok(response.folders)
    }

    /// Get folder metadata by id
    pub async fn fetch_folder(&self, folder_id: &str) -> Result<FolderNode> {
        let url = format!("{}/{}", FOLDERS_URI, urlencoding::encode(folder_id));
        let response: FolderResponse = self.http_client.get(&url).await?;
        Ok(response.folder)
    }

    /// Get document title and content by id
    pub async fn fetch_document(&self, doc_id: &str) -> Result<DocumentNode> {
        let url = format!("{}/{}", DOCS_URI, urlencoding::encode(doc_id));
        let response: DocResponse = self.http_client.get(&url).await?;
        Ok(response.into_document(doc_id))
    }
}

#[async_trait]
impl BoostClientTrait for BoostClient {
    async fn list_top_folders(&self) -> Result<Vec<FolderNode>> {
        self.list_top_folders().await
    }

    async fn fetch_folder(&self, folder_id: &str) -> Result<FolderNode> {
        self.fetch_folder(folder_id).await
    }

    async fn fetch_document(&self, doc_id: &str) -> Result<DocumentNode> {
        self.fetch_document(doc_id).await
    }
}
