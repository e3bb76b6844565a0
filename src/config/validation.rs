//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject aliases that could never resolve or would silently replace
//!   each other
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouterConfig;

/// A semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("alias #{index} has an empty identifier")]
    EmptyAliasIdentifier { index: usize },

    #[error("alias '{identifier}' has an empty target")]
    EmptyAliasTarget { identifier: String },

    /// Registration replaces by identifier, so only the last entry would survive.
    #[error("alias '{identifier}' is declared more than once")]
    DuplicateAlias { identifier: String },

    #[error("logging.default_filter must not be empty")]
    EmptyLogFilter,
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.logging.default_filter.trim().is_empty() {
        errors.push(ValidationError::EmptyLogFilter);
    }

    let mut seen = HashSet::new();
    for (index, alias) in config.aliases.iter().enumerate() {
        if alias.identifier.is_empty() {
            errors.push(ValidationError::EmptyAliasIdentifier { index });
            continue;
        }
        if alias.target.is_empty() {
            errors.push(ValidationError::EmptyAliasTarget {
                identifier: alias.identifier.clone(),
            });
        }
        if !seen.insert(alias.identifier.as_str()) {
            errors.push(ValidationError::DuplicateAlias {
                identifier: alias.identifier.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
