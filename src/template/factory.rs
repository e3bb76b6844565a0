//! Fluent template builder.

use std::marker::PhantomData;

use crate::codec::PathParam;
use crate::error::TemplateError;
use crate::template::params::{Params, Push};
use crate::template::segment::{validate_literal, validate_placeholder, SegmentSpec};
use crate::template::Template;

/// Builds a [`Template`] segment by segment.
///
/// The type parameter tracks the placeholder types added so far, so the
/// resulting template's arity is known statically:
///
/// ```
/// use typed_router::TemplateFactory;
///
/// let template = TemplateFactory::start()
///     .path("1")
///     .placeholder::<String>("p1")
///     .path("2")
///     .placeholder::<i64>("p2")
///     .build()
///     .unwrap();
///
/// assert_eq!(template.template_string(), "1/:p1/2/:p2");
/// assert_eq!(template.matcher("1/a/2/-5"), Some(("a".to_string(), -5)));
/// ```
///
/// Invalid segments do not interrupt the chain; the first error is returned
/// by [`build`](TemplateFactory::build).
pub struct TemplateFactory<P = ()> {
    segments: Vec<SegmentSpec>,
    error: Option<TemplateError>,
    _params: PhantomData<fn() -> P>,
}

impl TemplateFactory<()> {
    /// Start a new, empty builder.
    pub fn start() -> Self {
        Self {
            segments: Vec::new(),
            error: None,
            _params: PhantomData,
        }
    }
}

impl Default for TemplateFactory<()> {
    fn default() -> Self {
        Self::start()
    }
}

impl<P: Params> TemplateFactory<P> {
    /// Append one literal segment.
    pub fn path(mut self, segment: impl Into<String>) -> Self {
        let segment = segment.into();
        if let Err(e) = validate_literal(&segment) {
            self.record(e);
        }
        self.segments.push(SegmentSpec::Literal(segment));
        self
    }

    /// Append several literal segments, in order.
    pub fn paths<I>(self, segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        segments
            .into_iter()
            .fold(self, |factory, segment| factory.path(segment))
    }

    /// Append a placeholder decoded as `T`.
    ///
    /// Only available while fewer than ten placeholders have been added, so an
    /// eleventh placeholder does not compile:
    ///
    /// ```compile_fail
    /// use typed_router::TemplateFactory;
    ///
    /// let _ = TemplateFactory::start()
    ///     .placeholder::<u8>("a")
    ///     .placeholder::<u8>("b")
    ///     .placeholder::<u8>("c")
    ///     .placeholder::<u8>("d")
    ///     .placeholder::<u8>("e")
    ///     .placeholder::<u8>("f")
    ///     .placeholder::<u8>("g")
    ///     .placeholder::<u8>("h")
    ///     .placeholder::<u8>("i")
    ///     .placeholder::<u8>("j")
    ///     .placeholder::<u8>("k");
    /// ```
    pub fn placeholder<T>(mut self, name: impl Into<String>) -> TemplateFactory<<P as Push<T>>::Output>
    where
        T: PathParam,
        P: Push<T>,
    {
        let name = name.into();
        if let Err(e) = validate_placeholder(&name) {
            self.record(e);
        } else if self.has_placeholder(&name) {
            self.record(TemplateError::DuplicatePlaceholder { name: name.clone() });
        }
        self.segments.push(SegmentSpec::Placeholder {
            name,
            type_name: <T as PathParam>::type_name(),
        });

        TemplateFactory {
            segments: self.segments,
            error: self.error,
            _params: PhantomData,
        }
    }

    /// Number of placeholders added so far.
    pub fn arity(&self) -> usize {
        P::ARITY
    }

    /// Freeze the accumulated segments into a template.
    pub fn build(self) -> Result<Template<P>, TemplateError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(Template::from_segments(self.segments)),
        }
    }

    fn record(&mut self, error: TemplateError) {
        // Keep the first error only.
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    fn has_placeholder(&self, name: &str) -> bool {
        self.segments.iter().any(|segment| {
            matches!(segment, SegmentSpec::Placeholder { name: existing, .. } if existing == name)
        })
    }
}

impl<P> Clone for TemplateFactory<P> {
    fn clone(&self) -> Self {
        Self {
            segments: self.segments.clone(),
            error: self.error.clone(),
            _params: PhantomData,
        }
    }
}

impl<P> std::fmt::Debug for TemplateFactory<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateFactory")
            .field("segments", &self.segments)
            .field("error", &self.error)
            .finish()
    }
}
