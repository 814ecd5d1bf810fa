//! File operations materializing remote folders and documents on disk

use crate::boost_service::boost_models::{DocumentNode, FolderNode};
use crate::error::{ExportError, Result};
use crate::operations::path_utils::{document_file_name, folder_path_for_pathname};
use log::info;
use std::path::{Path, PathBuf};

/// Create the local directory for a folder, including missing ancestors.
/// Existing directories are left as they are.
pub fn materialize_folder(folder: &FolderNode, base_dir: &Path) -> Result<PathBuf> {
    let folder_path = folder_path_for_pathname(&folder.pathname, base_dir)?;
    std::fs::create_dir_all(&folder_path)
        .map_err(|e| ExportError::filesystem(&folder_path, e))?;
    Ok(folder_path)
}

/// Write a document's content into `folder_path`, replacing any existing file
/// with the same name.
pub fn materialize_document(doc: &DocumentNode, folder_path: &Path) -> Result<PathBuf> {
    let file_path = folder_path.join(document_file_name(&doc.title));

    info!("Saving: {}", file_path.display());

    std::fs::write(&file_path, doc.content.as_bytes())
        .map_err(|e| ExportError::filesystem(&file_path, e))?;
    Ok(file_path)
}
