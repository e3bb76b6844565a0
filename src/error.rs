//! Error types for template construction, matching and resolution.
//!
//! # Taxonomy
//! - [`DecodeError`]: a placeholder segment could not be converted to its type
//! - [`MatchError`]: why a single template rejected an input path
//! - [`RouteError`]: the not-found outcomes surfaced by the router
//! - [`TemplateError`]: construction-time misuse of the factory or DSL
//!
//! # Design Decisions
//! - Every failure is a value; nothing in the matching path panics
//! - `DecodeError` and `MatchError` never escape `Router::resolve`; they only
//!   fail the template being tried

use thiserror::Error;

use crate::path::Path;

/// A path segment could not be decoded into the placeholder's type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot decode '{raw}' as {type_name}: {reason}")]
pub struct DecodeError {
    /// Short name of the target type.
    pub type_name: &'static str,
    /// Raw segment that failed to decode.
    pub raw: String,
    /// Message from the underlying parser.
    pub reason: String,
}

/// Reason a template rejected an input path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Input and template have a different number of segments.
    #[error("expected {expected} segments, found {actual}")]
    SegmentCount { expected: usize, actual: usize },

    /// A literal segment did not match.
    #[error("segment {position}: expected '{expected}', found '{actual}'")]
    Literal {
        position: usize,
        expected: String,
        actual: String,
    },

    /// A placeholder value failed to decode.
    #[error("placeholder {index}: {source}")]
    Decode {
        /// Index of the placeholder in declaration order.
        index: usize,
        #[source]
        source: DecodeError,
    },
}

/// Not-found outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No registered template matches the path.
    #[error("no route matches '{path}'")]
    NoRouteMatched { path: Path },

    /// No alias with this identifier is registered.
    #[error("no alias named '{identifier}'")]
    AliasNotFound { identifier: String },

    /// The alias function produced no path for the supplied context.
    #[error("alias '{identifier}' returned no path for the given context")]
    AliasContextRejected { identifier: String },

    /// The supplied context has a different type than the registered alias.
    #[error("alias '{identifier}' expects a context of type {expected}")]
    AliasContextMismatch {
        identifier: String,
        expected: &'static str,
    },
}

impl RouteError {
    /// Classification hook for callers that map errors to responses.
    ///
    /// Every current variant is a not-found outcome. A variant added for some
    /// other kind of failure must return `false` here.
    pub fn is_not_found(&self) -> bool {
        true
    }

    /// The path or alias identifier that failed to resolve.
    pub fn target(&self) -> &str {
        match self {
            RouteError::NoRouteMatched { path } => path.as_str(),
            RouteError::AliasNotFound { identifier }
            | RouteError::AliasContextRejected { identifier }
            | RouteError::AliasContextMismatch { identifier, .. } => identifier,
        }
    }
}

/// Construction-time template errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A literal segment was empty or contained a `/`.
    #[error("invalid literal segment '{segment}'")]
    InvalidSegment { segment: String },

    /// A placeholder name was empty or contained a `/`.
    #[error("invalid placeholder name '{name}'")]
    InvalidPlaceholder { name: String },

    /// The same placeholder name was used twice.
    #[error("duplicate placeholder ':{name}'")]
    DuplicatePlaceholder { name: String },

    /// A template string declares a different number of placeholders than the
    /// handler accepts.
    #[error("template '{template}' has {found} placeholders, expected {expected}")]
    ArityMismatch {
        template: String,
        expected: usize,
        found: usize,
    },

    /// A value encodes to something that cannot occupy a single segment.
    #[error("value '{value}' for ':{name}' cannot be rendered as a path segment")]
    UnrenderableValue { name: String, value: String },
}

/// Result alias for resolution.
pub type RouteResult<T> = Result<T, RouteError>;
