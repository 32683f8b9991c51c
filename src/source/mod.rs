//! Record table providers.
//!
//! # Data Flow
//! ```text
//! config (source.kind)
//!     → sheet.rs (published export fetched over HTTP)  ─┐
//!     → file.rs  (local CSV/TSV file)                  ─┴─▶ raw table text
//!                                                           → lookup::matcher
//! ```
//!
//! # Design Decisions
//! - Both providers satisfy the same contract: produce the full table
//!   text for one query; the matcher never knows where it came from
//! - One fetch per query, no caching, no automatic retry; a failed
//!   fetch is terminal for that query only

pub mod file;
pub mod sheet;

pub use file::FileSource;
pub use sheet::SheetSource;

use std::time::Duration;

use crate::config::{SourceConfig, SourceKind};

/// Error type for table providers.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("upstream request timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed to read table file: {0}")]
    Io(#[from] std::io::Error),
}

/// A configured table provider.
#[derive(Debug, Clone)]
pub enum RecordSource {
    Sheet(SheetSource),
    File(FileSource),
}

impl RecordSource {
    /// Build the provider selected by configuration.
    pub fn from_config(config: &SourceConfig) -> Self {
        match config.kind {
            SourceKind::Sheet => RecordSource::Sheet(SheetSource::new(
                config.sheet_url.clone(),
                Duration::from_secs(config.fetch_timeout_secs),
            )),
            SourceKind::File => RecordSource::File(FileSource::new(&config.file_path)),
        }
    }

    /// Fetch the raw table text for one query.
    pub async fn fetch_table(&self) -> Result<String, SourceError> {
        match self {
            RecordSource::Sheet(sheet) => sheet.fetch_table().await,
            RecordSource::File(file) => file.fetch_table().await,
        }
    }
}
