//! Local table file provider.

use std::path::{Path, PathBuf};

use crate::source::SourceError;

/// Reads the record table from a local CSV/TSV file.
///
/// The file is re-read on every query so edits are picked up without a
/// restart, mirroring the per-query fetch of the sheet provider.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a provider for the given file path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the table text once.
    pub async fn fetch_table(&self) -> Result<String, SourceError> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Table file read failed");
            SourceError::Io(e)
        })?;
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "Table file read");
        Ok(text)
    }
}
