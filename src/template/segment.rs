//! Segment specifications and their validation.

use std::collections::HashSet;
use std::fmt;

use crate::error::TemplateError;

/// One segment of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentSpec {
    /// Must equal the input segment exactly.
    Literal(String),
    /// Captures the input segment and decodes it as `type_name`.
    Placeholder {
        name: String,
        type_name: &'static str,
    },
}

impl SegmentSpec {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, SegmentSpec::Placeholder { .. })
    }
}

impl fmt::Display for SegmentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // A leading `:` would read as a placeholder.
            SegmentSpec::Literal(literal) if literal.starts_with(':') => write!(f, "\\{}", literal),
            SegmentSpec::Literal(literal) => f.write_str(literal),
            SegmentSpec::Placeholder { name, .. } => write!(f, ":{}", name),
        }
    }
}

pub(crate) fn validate_literal(segment: &str) -> Result<(), TemplateError> {
    if segment.is_empty() || segment.contains('/') {
        return Err(TemplateError::InvalidSegment {
            segment: segment.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn validate_placeholder(name: &str) -> Result<(), TemplateError> {
    if name.is_empty() || name.contains('/') {
        return Err(TemplateError::InvalidPlaceholder {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Check every segment and placeholder-name uniqueness.
pub(crate) fn validate_segments(segments: &[SegmentSpec]) -> Result<(), TemplateError> {
    let mut seen = HashSet::new();
    for segment in segments {
        match segment {
            SegmentSpec::Literal(literal) => validate_literal(literal)?,
            SegmentSpec::Placeholder { name, .. } => {
                validate_placeholder(name)?;
                if !seen.insert(name.as_str()) {
                    return Err(TemplateError::DuplicatePlaceholder { name: name.clone() });
                }
            }
        }
    }
    Ok(())
}

/// Join segments with `/`, rendering placeholders as `:name`.
pub(crate) fn render_template(segments: &[SegmentSpec]) -> String {
    segments
        .iter()
        .map(|segment| segment.to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder(name: &str) -> SegmentSpec {
        SegmentSpec::Placeholder {
            name: name.to_string(),
            type_name: "u64",
        }
    }

    #[test]
    fn test_render() {
        let segments = vec![SegmentSpec::Literal("items".into()), placeholder("id")];
        assert_eq!(render_template(&segments), "items/:id");
        assert_eq!(render_template(&[]), "");
    }

    #[test]
    fn test_render_escapes_colon_literal() {
        let segments = vec![SegmentSpec::Literal(":id".into()), placeholder("id")];
        assert_eq!(render_template(&segments), "\\:id/:id");
    }

    #[test]
    fn test_validate_literal() {
        assert!(validate_literal("a").is_ok());
        assert!(matches!(
            validate_literal(""),
            Err(TemplateError::InvalidSegment { .. })
        ));
        assert!(matches!(
            validate_literal("a/b"),
            Err(TemplateError::InvalidSegment { .. })
        ));
    }

    #[test]
    fn test_duplicate_placeholder() {
        let segments = vec![placeholder("id"), SegmentSpec::Literal("x".into()), placeholder("id")];
        assert_eq!(
            validate_segments(&segments),
            Err(TemplateError::DuplicatePlaceholder { name: "id".into() })
        );
    }
}
