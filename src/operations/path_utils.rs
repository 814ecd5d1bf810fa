//! Path utilities mapping remote pathnames and titles onto the local tree

use crate::error::{ExportError, Result};
use std::io;
use std::path::{Component, Path, PathBuf};

pub const DOCUMENT_EXTENSION: &str = "md";

/// Convert a remote folder pathname to a path relative to the output root.
/// A single leading separator is stripped, so `/a/b` and `a/b` are equivalent.
pub fn pathname_to_local_components(pathname: &str) -> PathBuf {
    let clean_path = pathname.strip_prefix('/').unwrap_or(pathname);
    PathBuf::from(clean_path)
}

/// Resolve a remote folder pathname under `base_dir`.
/// Pathnames that would leave `base_dir` are rejected.
pub fn folder_path_for_pathname(pathname: &str, base_dir: &Path) -> Result<PathBuf> {
    let relative = pathname_to_local_components(pathname);

    // Rejected rather than followed: a `..` or root component would write outside base_dir.
    let escapes = relative.components().any(|c| {
        matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_))
    });
    if escapes {
        return Err(ExportError::filesystem(
            base_dir.join(&relative),
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Pathname {:?} escapes the output directory", pathname),
            ),
        ));
    }

    Ok(base_dir.join(relative))
}

/// File name for a document: the slug of its title with the markdown extension
pub fn document_file_name(title: &str) -> String {
    format!("{}.{}", slug::slugify(title), DOCUMENT_EXTENSION)
}
