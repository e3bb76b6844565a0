//! Configuration loading from disk.

use std::fs;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &std::path::Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<RouterConfig, ConfigError> {
    let config: RouterConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            parse_config("[logging\nlog_unmatched = true"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validation_error_message() {
        let err = parse_config(
            r#"
            [[aliases]]
            identifier = "a"
            target = "x"

            [[aliases]]
            identifier = "a"
            target = "y"
            "#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: alias 'a' is declared more than once"
        );
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("typed-router-config-{}.toml", std::process::id()));
        fs::write(&path, "[metrics]\nenabled = true\n").unwrap();

        let config = load_config(&path).unwrap();
        assert!(config.metrics.enabled);

        fs::remove_file(&path).unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Io(_))));
    }
}
