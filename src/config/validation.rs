//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the configured source is usable (sheet URL well-formed,
//!   file path present)
//! - Validate value ranges (timeouts > 0, body limit > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::{ServiceConfig, SourceKind};

/// A single semantic validation failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("source.sheet_url is required when source.kind = \"sheet\"")]
    MissingSheetUrl,

    #[error("source.sheet_url {0:?} is not a valid URL")]
    InvalidSheetUrl(String),

    #[error("source.file_path is required when source.kind = \"file\"")]
    MissingFilePath,

    #[error("source.fetch_timeout_secs must be greater than zero")]
    ZeroFetchTimeout,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("limits.max_body_size must be greater than zero")]
    ZeroBodyLimit,
}

/// Validate a deserialized configuration, collecting every failure.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match config.source.kind {
        SourceKind::Sheet => {
            if config.source.sheet_url.is_empty() {
                errors.push(ValidationError::MissingSheetUrl);
            } else if Url::parse(&config.source.sheet_url).is_err() {
                errors.push(ValidationError::InvalidSheetUrl(
                    config.source.sheet_url.clone(),
                ));
            }
        }
        SourceKind::File => {
            if config.source.file_path.is_empty() {
                errors.push(ValidationError::MissingFilePath);
            }
        }
    }

    if config.source.fetch_timeout_secs == 0 {
        errors.push(ValidationError::ZeroFetchTimeout);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.limits.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_config(url: &str) -> ServiceConfig {
        let mut config = ServiceConfig::default();
        config.source.kind = SourceKind::Sheet;
        config.source.sheet_url = url.to_string();
        config
    }

    #[test]
    fn test_default_sheet_config_rejected() {
        // Default config has no sheet URL
        let errors = validate_config(&ServiceConfig::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::MissingSheetUrl)));
    }

    #[test]
    fn test_valid_sheet_config() {
        let config = sheet_config("https://example.com/pub?output=csv");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_malformed_sheet_url() {
        let config = sheet_config("not a url");
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidSheetUrl(_))));
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = sheet_config("");
        config.listener.bind_address = "nowhere".to_string();
        config.timeouts.request_secs = 0;
        config.limits.max_body_size = 0;
        config.source.fetch_timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_file_kind_requires_path() {
        let mut config = ServiceConfig::default();
        config.source.kind = SourceKind::File;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::MissingFilePath)));
    }
}
