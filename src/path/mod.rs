//! Path and alias value types.
//!
//! # Responsibilities
//! - Normalize path strings into `/`-separated, non-empty segments
//! - Provide typed alias handles keyed by identifier
//!
//! # Design Decisions
//! - Normalization drops empty segments, so `"/a//b/"` equals `"a/b"`
//! - Equality and hashing use the normalized string only
//! - An alias carries its context type in a phantom, never a value

mod alias;

pub use alias::Alias;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized route path.
///
/// ```
/// use typed_router::Path;
///
/// let path = Path::new("/product//details/42/");
/// assert_eq!(path.as_str(), "product/details/42");
/// assert_eq!(path.segment_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Path {
    path: String,
}

impl Path {
    /// Create a path, normalizing separators.
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            path: split_segments(path.as_ref()).collect::<Vec<_>>().join("/"),
        }
    }

    /// The normalized path string.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Iterate over the segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        split_segments(&self.path)
    }

    pub fn segment_count(&self) -> usize {
        self.segments().count()
    }

    /// True for the root path (zero segments).
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Append segments, returning a new path.
    pub fn join(&self, segment: impl AsRef<str>) -> Self {
        let tail = Path::new(segment);
        if self.is_empty() {
            return tail;
        }
        if tail.is_empty() {
            return self.clone();
        }
        Self {
            path: format!("{}/{}", self.path, tail.path),
        }
    }
}

/// Split on `/`, skipping empty segments.
pub(crate) fn split_segments(input: &str) -> impl Iterator<Item = &str> {
    input.split('/').filter(|segment| !segment.is_empty())
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<&String> for Path {
    fn from(path: &String) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl From<Path> for String {
    fn from(path: Path) -> Self {
        path.path
    }
}
