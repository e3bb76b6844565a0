//! Type-erased routes.

use crate::codec::short_type_name;
use crate::error::MatchError;
use crate::path::Path;
use crate::routing::handler::Handler;
use crate::template::{Params, Template};

/// A registered route, erased over its placeholder types.
pub(crate) trait Resolvable<R>: Send + Sync {
    /// Template string, for logs.
    fn template(&self) -> &str;

    fn description(&self) -> &str;

    /// Match the path and, on success, run the handler.
    fn try_match(&self, path: &Path) -> Result<R, MatchError>;
}

/// A template bound to its handler.
pub(crate) struct TypedRoute<P, H> {
    template: Template<P>,
    handler: H,
    description: String,
}

impl<P: Params, H> TypedRoute<P, H> {
    pub(crate) fn new<R>(template: Template<P>, handler: H) -> Self
    where
        H: Handler<P, R>,
    {
        let description = describe_route(
            template.template_string(),
            &P::type_names(),
            short_type_name(std::any::type_name::<R>()),
        );
        Self {
            template,
            handler,
            description,
        }
    }
}

impl<P, H, R> Resolvable<R> for TypedRoute<P, H>
where
    P: Params,
    H: Handler<P, R>,
{
    fn template(&self) -> &str {
        self.template.template_string()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn try_match(&self, path: &Path) -> Result<R, MatchError> {
        let params = self.template.try_match(path.as_str())?;
        Ok(self.handler.call(params))
    }
}

/// `Route('items/:id' (u64) -> String)`
fn describe_route(template: &str, args: &[&str], output: &str) -> String {
    format!("Route('{}' ({}) -> {})", template, args.join(", "), output)
}
