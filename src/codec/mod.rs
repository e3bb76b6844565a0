//! Placeholder codec.
//!
//! # Data Flow
//! ```text
//! raw path segment ("42")
//!     → param.rs (PathParam::decode via FromStr)
//!     → typed value (42u64) or DecodeError
//!
//! typed value
//!     → param.rs (PathParam::encode via Display)
//!     → path segment, used by Template::path_for
//! ```
//!
//! # Design Decisions
//! - Any `FromStr + Display` type is a placeholder type; no registration step
//! - Parsing is exactly the standard library's: no trimming, no locale
//! - Type names are shortened for human-readable route descriptions

mod param;

pub use param::{short_type_name, PathParam};
