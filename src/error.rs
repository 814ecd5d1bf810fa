use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort an export run.
///
/// Every variant is fatal: the traversal does not retry or skip, it stops at
/// the first error and leaves whatever was already written on disk.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Remote request to {url} failed: {reason}")]
    Remote { url: String, reason: String },

    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub fn remote(url: impl Into<String>, reason: impl ToString) -> Self {
        ExportError::Remote {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
