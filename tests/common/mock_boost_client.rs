use async_trait::async_trait;
use boost_export::boost_service::boost_client::BoostClientTrait;
use boost_export::boost_service::boost_models::{DocumentNode, FolderNode};
use boost_export::error::{ExportError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Canned remote graph served by the mock
#[derive(Debug, Clone, Default)]
pub struct MockResponses {
    pub top_folders: Vec<FolderNode>,
    pub folders: HashMap<String, FolderNode>,
    pub documents: HashMap<String, DocumentNode>,
    /// Operation names (`fetch_document`) or targeted calls (`fetch_document:d2`) that fail
    pub should_fail_operations: Vec<String>,
}

/// Mock implementation of BoostClientTrait for testing
#[derive(Clone, Default)]
pub struct MockBoostClient {
    responses: Arc<Mutex<MockResponses>>,
    call_counter: Arc<Mutex<HashMap<String, usize>>>,
    call_log: Arc<Mutex<Vec<String>>>,
}

impl MockBoostClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a folder reachable by id
    pub fn add_folder(&self, folder: FolderNode) {
        let mut responses = self.responses.lock().unwrap();
        responses.folders.insert(folder.id.clone(), folder);
    }

    /// Register a folder and list it at the top level
    pub fn add_top_folder(&self, folder: FolderNode) {
        let mut responses = self.responses.lock().unwrap();
        responses.top_folders.push(folder.clone());
        responses.folders.insert(folder.id.clone(), folder);
    }

    pub fn add_document(&self, doc: DocumentNode) {
        let mut responses = self.responses.lock().unwrap();
        responses.documents.insert(doc.id.clone(), doc);
    }

    /// Make an operation fail, optionally for a single id (`fetch_document:d2`)
    pub fn make_operation_fail(&self, operation: &str) {
        let mut responses = self.responses.lock().unwrap();
        if !responses.should_fail_operations.contains(&operation.to_string()) {
            responses.should_fail_operations.push(operation.to_string());
        }
    }

    /// Number of calls to an operation, or to an operation for one id
    pub fn get_call_count(&self, operation: &str) -> usize {
        let counter = self.call_counter.lock().unwrap();
        counter.get(operation).copied().unwrap_or(0)
    }

    /// Every call in order, as `operation:id`
    pub fn call_log(&self) -> Vec<String> {
        self.call_log.lock().unwrap().clone()
    }

    /// Increment call counters and check if the call should fail
    fn record_call(&self, operation: &str, id: Option<&str>) -> bool {
        let targeted = id.map(|id| format!("{}:{}", operation, id));
        {
            let mut counter = self.call_counter.lock().unwrap();
            *counter.entry(operation.to_string()).or_insert(0) += 1;
            if let Some(targeted) = &targeted {
                *counter.entry(targeted.clone()).or_insert(0) += 1;
            }
        }
        self.call_log
            .lock()
            .unwrap()
            .push(targeted.clone().unwrap_or_else(|| operation.to_string()));

        let responses = self.responses.lock().unwrap();
        responses.should_fail_operations.iter().any(|failing| {
            failing == operation || Some(failing) == targeted.as_ref()
        })
    }
}

#[async_trait]
impl BoostClientTrait for MockBoostClient {
    async fn list_top_folders(&self) -> Result<Vec<FolderNode>> {
        if self.record_call("list_top_folders", None) {
            return Err(ExportError::remote("mock://folders", "Mock list folders failure"));
        }
        Ok(self.responses.lock().unwrap().top_folders.clone())
    }

    async fn fetch_folder(&self, folder_id: &str) -> Result<FolderNode> {
        let url = format!("mock://folders/{}", folder_id);
        if self.record_call("fetch_folder", Some(folder_id)) {
            return Err(ExportError::remote(url, "Mock fetch folder failure"));
        }
        let responses = self.responses.lock().unwrap();
        responses
            .folders
            .get(folder_id)
            .cloned()
            .ok_or_else(|| ExportError::remote(url, "404 Not Found"))
    }

    async fn fetch_document(&self, doc_id: &str) -> Result<DocumentNode> {
        let url = format!("mock://docs/{}", doc_id);
        if self.record_call("fetch_document", Some(doc_id)) {
            return Err(ExportError::remote(url, "Mock fetch document failure"));
        }
        let responses = self.responses.lock().unwrap();
        responses
            .documents
            .get(doc_id)
            .cloned()
            .ok_or_else(|| ExportError::remote(url, "404 Not Found"))
    }
}
