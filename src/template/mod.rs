//! Route templates.
//!
//! # Data Flow
//! ```text
//! TemplateFactory (path / placeholder calls)        "items/:id" string
//!     → factory.rs (validate, track arity in P)      → Template::parse
//!     → Template<P> (immutable segment specs)  ←─────┘
//!
//! Matching:
//!     input path
//!     → split & normalize
//!     → segment count check
//!     → literal comparison, raw placeholder capture
//!     → params.rs (decode each placeholder) → P
//! ```
//!
//! # Design Decisions
//! - Segment specs are a runtime `Vec`; only the result tuple is static
//! - The template string is for display; matching never re-parses it
//! - Placeholder values are returned in declaration order

mod factory;
mod params;
mod segment;

pub use factory::TemplateFactory;
pub use params::{Params, Push, MAX_ARITY};
pub use segment::SegmentSpec;

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::{MatchError, TemplateError};
use crate::path::{split_segments, Path};
use segment::{render_template, validate_segments};

/// A compiled route pattern whose placeholders decode into `P`.
pub struct Template<P> {
    segments: Vec<SegmentSpec>,
    template: String,
    _params: PhantomData<fn() -> P>,
}

impl<P: Params> Template<P> {
    /// Segments must already be validated and agree with `P`.
    pub(crate) fn from_segments(segments: Vec<SegmentSpec>) -> Self {
        let template = render_template(&segments);
        Self {
            segments,
            template,
            _params: PhantomData,
        }
    }

    /// Parse a template string such as `"items/:id"`.
    ///
    /// The string is normalized like a [`Path`]. A segment starting with `:` is
    /// a placeholder named by the rest of the segment; every other segment is
    /// a literal; `\\:` at the start of a segment escapes a literal `:`.
    /// Placeholder types are taken from `P`, left to right, and the
    /// number of placeholders must equal `P::ARITY`.
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let mut type_names = P::type_names().into_iter();
        let segments: Vec<SegmentSpec> = split_segments(template)
            .map(|segment| {
                if let Some(literal) = segment.strip_prefix('\\').filter(|s| s.starts_with(':')) {
                    return SegmentSpec::Literal(literal.to_string());
                }
                match segment.strip_prefix(':') {
                    Some(name) => SegmentSpec::Placeholder {
                        name: name.to_string(),
                        type_name: type_names.next().unwrap_or_default(),
                    },
                    None => SegmentSpec::Literal(segment.to_string()),
                }
            })
            .collect();

        validate_segments(&segments)?;

        let found = segments.iter().filter(|s| s.is_placeholder()).count();
        if found != P::ARITY {
            return Err(TemplateError::ArityMismatch {
                template: template.to_string(),
                expected: P::ARITY,
                found,
            });
        }

        Ok(Self::from_segments(segments))
    }

    /// Segments joined by `/`, placeholders rendered as `:name`.
    ///
    /// Literals starting with `:` are written as `\\:..`, so the string parses
    /// back into the same segments.
    pub fn template_string(&self) -> &str {
        &self.template
    }

    pub fn arity(&self) -> usize {
        P::ARITY
    }

    pub fn segments(&self) -> &[SegmentSpec] {
        &self.segments
    }

    /// Placeholder names in declaration order.
    pub fn placeholder_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            SegmentSpec::Placeholder { name, .. } => Some(name.as_str()),
            SegmentSpec::Literal(_) => None,
        })
    }

    /// Placeholder type names in declaration order.
    pub fn type_names(&self) -> Vec<&'static str> {
        P::type_names()
    }

    /// Match `input`, returning the decoded placeholder values.
    pub fn matcher(&self, input: &str) -> Option<P> {
        self.try_match(input).ok()
    }

    /// Like [`matcher`](Template::matcher), but reports why the input was
    /// rejected.
    pub fn try_match(&self, input: &str) -> Result<P, MatchError> {
        let input: Vec<&str> = split_segments(input).collect();
        if input.len() != self.segments.len() {
            return Err(MatchError::SegmentCount {
                expected: self.segments.len(),
                actual: input.len(),
            });
        }

        let mut raw = Vec::with_capacity(P::ARITY);
        for (position, (spec, segment)) in self.segments.iter().zip(&input).enumerate() {
            match spec {
                SegmentSpec::Literal(literal) if literal.as_str() != *segment => {
                    return Err(MatchError::Literal {
                        position,
                        expected: literal.clone(),
                        actual: segment.to_string(),
                    });
                }
                SegmentSpec::Literal(_) => {}
                SegmentSpec::Placeholder { .. } => raw.push(*segment),
            }
        }

        P::decode(&raw)
    }

    /// Render a concrete path by substituting `params` into the placeholders.
    ///
    /// Fails if a value encodes to an empty string or one containing `/`,
    /// since the result could not match this template again.
    pub fn path_for(&self, params: &P) -> Result<Path, TemplateError> {
        let mut values = params.encode().into_iter();
        let mut rendered = Vec::with_capacity(self.segments.len());

        for spec in &self.segments {
            match spec {
                SegmentSpec::Literal(literal) => rendered.push(literal.clone()),
                SegmentSpec::Placeholder { name, .. } => {
                    let value = values.next().unwrap_or_default();
                    if value.is_empty() || value.contains('/') {
                        return Err(TemplateError::UnrenderableValue {
                            name: name.clone(),
                            value,
                        });
                    }
                    rendered.push(value);
                }
            }
        }

        Ok(Path::new(rendered.join("/")))
    }
}

impl<P: Params> FromStr for Template<P> {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<P> Clone for Template<P> {
    fn clone(&self) -> Self {
        Self {
            segments: self.segments.clone(),
            template: self.template.clone(),
            _params: PhantomData,
        }
    }
}

impl<P> fmt::Debug for Template<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("template", &self.template)
            .field("segments", &self.segments)
            .finish()
    }
}

impl<P> fmt::Display for Template<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}
