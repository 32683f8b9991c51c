//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ServiceConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::SourceKind;

    #[test]
    fn test_minimal_config_parses() {
        let toml = r#"
            [source]
            kind = "file"
            file_path = "alunos.csv"
        "#;
        let config: ServiceConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.source.kind, SourceKind::File);
        assert_eq!(config.source.file_path, "alunos.csv");
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
    }

    #[test]
    fn test_sheet_config_parses() {
        let toml = r#"
            [listener]
            bind_address = "0.0.0.0:9000"

            [source]
            kind = "sheet"
            sheet_url = "https://docs.google.com/spreadsheets/d/e/abc/pub?output=csv"
            fetch_timeout_secs = 5
        "#;
        let config: ServiceConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.source.kind, SourceKind::Sheet);
        assert_eq!(config.source.fetch_timeout_secs, 5);
        assert_eq!(config.listener.bind_address, "0.0.0.0:9000");
    }
}
