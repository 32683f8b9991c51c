//! Published spreadsheet export provider.
//!
//! Fetches the whole table as text from a fixed published-document URL.
//! The response `Content-Type` is irrelevant; the body is handed to the
//! matcher as-is.

use std::time::Duration;

use tokio::time;

use crate::source::SourceError;

/// HTTP provider for a published sheet export.
#[derive(Debug, Clone)]
pub struct SheetSource {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl SheetSource {
    /// Create a provider for the given published-document URL.
    pub fn new(url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            timeout,
        }
    }

    /// Fetch the table text once.
    pub async fn fetch_table(&self) -> Result<String, SourceError> {
        tracing::debug!(url = %self.url, "Fetching sheet export");

        let response = match time::timeout(self.timeout, self.client.get(&self.url).send()).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                tracing::warn!(url = %self.url, error = %e, "Sheet fetch failed: connection error");
                return Err(SourceError::Http(e));
            }
            Err(_) => {
                tracing::warn!(url = %self.url, timeout = ?self.timeout, "Sheet fetch failed: timeout");
                return Err(SourceError::Timeout(self.timeout));
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, status = %status, "Sheet fetch failed: non-success status");
            return Err(SourceError::Status(status));
        }

        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "Sheet export received");
        Ok(body)
    }
}
