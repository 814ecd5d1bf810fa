use crate::boost_service::boost_client::BoostClientTrait;
use crate::boost_service::boost_models::FolderNode;
use crate::error::Result;
use log::debug;
use std::collections::HashMap;

/// Folder metadata fetched during the current run, keyed by folder id.
/// Entries are never evicted, so each id is fetched at most once.
#[derive(Debug, Default)]
pub struct FolderCache {
    folders: HashMap<String, FolderNode>,
}

impl FolderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached folder, fetching it through `client` on a miss
    pub async fn get_folder<C>(&mut self, folder_id: &str, client: &C) -> Result<FolderNode>
    where
        C: BoostClientTrait + ?Sized,
    {
        if let Some(folder) = self.folders.get(folder_id) {
            return Ok(folder.clone());
        }

        debug!("Folder cache miss: {}", folder_id);
        let folder = client.fetch_folder(folder_id).await?;
        self.folders.insert(folder_id.to_string(), folder.clone());
        Ok(folder)
    }

    pub fn contains(&self, folder_id: &str) -> bool {
        self.folders.contains_key(folder_id)
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}
