//! Depth-first export of the remote folder graph onto the local filesystem.
//!
//! A folder moves from unvisited to in-progress (directory created, documents
//! being written) to visited exactly once per run. It is marked visited before
//! its subfolders are entered, so a folder reachable from its own descendants,
//! or shared by several parents, is never processed twice. The flip side is
//! that a run aborted inside a folder's subtree has already recorded that
//! folder as done; a fresh run starts from empty state and redoes everything.

use crate::boost_service::boost_client::BoostClientTrait;
use crate::boost_service::boost_models::FolderNode;
use crate::error::Result;
use crate::operations::file_ops::{materialize_document, materialize_folder};
use crate::sync::folder_cache::FolderCache;
use log::{debug, info};
use std::collections::HashSet;
use std::path::PathBuf;

/// Totals for a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub folders: usize,
    pub documents: usize,
}

/// Traversal state for one export run
pub struct TreeSync<C: BoostClientTrait> {
    client: C,
    base_dir: PathBuf,
    visited_docs: HashSet<String>,
    visited_folders: HashSet<String>,
    folder_cache: FolderCache,
}

impl<C: BoostClientTrait> TreeSync<C> {
    pub fn new(client: C, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            base_dir: base_dir.into(),
            visited_docs: HashSet::new(),
            visited_folders: HashSet::new(),
            folder_cache: FolderCache::new(),
        }
    }

    /// Export every folder reachable from the top-level listing
    pub async fn run(&mut self) -> Result<RunSummary> {
        info!("Exporting into {}", self.base_dir.display());

        let top_folders = self.client.list_top_folders().await?;
        for folder in top_folders {
            if self.visited_folders.contains(&folder.id) {
                continue;
            }
            self.process_folder(folder).await?;
        }

        Ok(self.summary())
    }

    /// Materialize `folder` and everything below it that has not been visited
    /// yet. The caller decides whether `folder` itself still needs processing.
    pub async fn process_folder(&mut self, folder: FolderNode) -> Result<()> {
        let mut pending = Vec::new();
        self.enter_folder(folder, &mut pending).await?;

        // Visited is checked on pop, when the recursive walk would check it.
        while let Some(folder_id) = pending.pop() {
            if self.visited_folders.contains(&folder_id) {
                continue;
            }
            let folder = self.folder_cache.get_folder(&folder_id, &self.client).await?;
            self.enter_folder(folder, &mut pending).await?;
        }
        Ok(())
    }

    async fn enter_folder(&mut self, folder: FolderNode, pending: &mut Vec<String>) -> Result<()> {
        debug!("Processing folder {} ({})", folder.id, folder.pathname);
        let folder_path = materialize_folder(&folder, &self.base_dir)?;

        for doc_id in &folder.child_doc_ids {
            if self.visited_docs.contains(doc_id) {
                continue;
            }
            let doc = self.client.fetch_document(doc_id).await?;
            materialize_document(&doc, &folder_path)?;
            self.visited_docs.insert(doc_id.clone());
        }

        self.visited_folders.insert(folder.id.clone());

        // Reversed so the first child is popped first.
        pending.extend(folder.child_folder_ids.iter().rev().cloned());
        Ok(())
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            folders: self.visited_folders.len(),
            documents: self.visited_docs.len(),
        }
    }

    pub fn is_folder_visited(&self, folder_id: &str) -> bool {
        self.visited_folders.contains(folder_id)
    }

    pub fn is_doc_visited(&self, doc_id: &str) -> bool {
        self.visited_docs.contains(doc_id)
    }

    pub fn folder_cache(&self) -> &FolderCache {
        &self.folder_cache
    }
}
