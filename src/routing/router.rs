//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes and registered aliases
//! - Resolve paths newest-route-first
//! - Resolve aliases through their context function, then as paths
//! - Report attempts to an optional observer
//!
//! # Design Decisions
//! - O(n) scan over routes (acceptable for typical route counts)
//! - Explicit not-found errors rather than a silent default
//! - Observers and logs see every attempt; neither affects the outcome

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::config::RouterConfig;
use crate::error::{RouteError, RouteResult, TemplateError};
use crate::observability::{MetricsObserver, RouterObserver};
use crate::path::{Alias, Path};
use crate::routing::alias::RegisteredAlias;
use crate::routing::handler::Handler;
use crate::routing::route::{Resolvable, TypedRoute};
use crate::template::{Params, Template};

/// Registry of typed routes and aliases producing results of type `R`.
///
/// ```
/// use typed_router::{Alias, Path, Router, TemplateFactory};
///
/// let mut router: Router<String> = Router::new();
/// let details = TemplateFactory::start()
///     .paths(["product", "details"])
///     .placeholder::<u64>("id")
///     .build()
///     .unwrap();
/// router.add(details, |id: u64| format!("product #{}", id));
///
/// const PRODUCT: Alias<u64> = Alias::new("product");
/// router.add_alias(&PRODUCT, |id: u64| Some(Path::new(format!("product/details/{}", id))));
///
/// assert_eq!(router.resolve("product/details/42").unwrap(), "product #42");
/// assert_eq!(router.resolve_alias(&PRODUCT, 7).unwrap(), "product #7");
/// assert!(router.resolve("product/details/abc").is_err());
/// ```
///
/// # Concurrency
///
/// All operations are synchronous and run on the caller's thread. The router
/// does no locking of its own: a router shared between threads must be
/// wrapped by the caller (for example in a `RwLock`), and registration must
/// not interleave with resolution without that lock.
pub struct Router<R> {
    routes: Vec<Box<dyn Resolvable<R>>>,
    aliases: Vec<RegisteredAlias>,
    observer: Option<Arc<dyn RouterObserver>>,
    config: RouterConfig,
}

impl<R: 'static> Router<R> {
    /// Create an empty router with default configuration.
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Create an empty router; only the logging switches are read.
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            routes: Vec::new(),
            aliases: Vec::new(),
            observer: None,
            config,
        }
    }

    /// Create a router from configuration, registering its static aliases
    /// and, when enabled, a [`MetricsObserver`].
    pub fn from_config(config: RouterConfig) -> Self {
        let aliases = config.aliases.clone();
        let metrics_enabled = config.metrics.enabled;
        let mut router = Self::with_config(config);

        for entry in aliases {
            let target = entry.target;
            router.add_alias(&Alias::<()>::named(entry.identifier), move |()| Some(target.clone()));
        }
        if metrics_enabled {
            router.set_observer(Arc::new(MetricsObserver));
        }

        tracing::debug!(
            aliases = router.aliases.len(),
            metrics = metrics_enabled,
            "Router created from configuration"
        );
        router
    }

    /// Attach an observer, replacing any previous one.
    ///
    /// This includes the [`MetricsObserver`] installed by
    /// [`from_config`](Router::from_config); wrap it in your own observer to
    /// keep recording metrics.
    pub fn with_observer(mut self, observer: Arc<dyn RouterObserver>) -> Self {
        self.set_observer(observer);
        self
    }

    /// See [`with_observer`](Router::with_observer).
    pub fn set_observer(&mut self, observer: Arc<dyn RouterObserver>) {
        if self.observer.replace(observer).is_some() {
            tracing::debug!("Replacing router observer");
        }
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Register a route. Newer routes take precedence over older ones.
    pub fn add<P, H>(&mut self, template: Template<P>, handler: H) -> &mut Self
    where
        P: Params,
        H: Handler<P, R>,
    {
        let route = TypedRoute::new(template, handler);
        tracing::debug!(
            route = Resolvable::<R>::description(&route),
            routes = self.routes.len() + 1,
            "Route added"
        );
        self.routes.push(Box::new(route));
        self
    }

    /// Register a route from a template string such as `"items/:id"`.
    ///
    /// Placeholder types come from the handler's arguments, so their number
    /// must match the placeholders in the string.
    pub fn add_path<P, H>(&mut self, template: &str, handler: H) -> Result<&mut Self, TemplateError>
    where
        P: Params,
        H: Handler<P, R>,
    {
        let template = Template::<P>::parse(template)?;
        Ok(self.add(template, handler))
    }

    /// Register an alias, replacing an existing alias with the same identifier.
    pub fn add_alias<C, F>(&mut self, alias: &Alias<C>, apply: F) -> &mut Self
    where
        C: 'static,
        F: Fn(C) -> Option<Path> + Send + Sync + 'static,
    {
        let entry = RegisteredAlias::new(alias, apply);
        if let Some(index) = self
            .aliases
            .iter()
            .position(|existing| existing.identifier() == entry.identifier())
        {
            let replaced = self.aliases.remove(index);
            tracing::debug!(
                identifier = entry.identifier(),
                previous = replaced.description(),
                "Replacing alias"
            );
        }
        tracing::debug!(alias = entry.description(), "Alias added");
        self.aliases.push(entry);
        self
    }

    /// Resolve a path against the registered routes, newest first.
    pub fn resolve(&self, path: impl Into<Path>) -> RouteResult<R> {
        let path = path.into();
        let start = Instant::now();
        if let Some(observer) = &self.observer {
            observer.match_started(&path);
        }

        let result = self.match_routes(&path);
        let elapsed = start.elapsed();

        match &result {
            Ok(_) => {
                tracing::debug!(path = %path, elapsed = ?elapsed, "Path resolved");
                if let Some(observer) = &self.observer {
                    observer.match_succeeded(&path, elapsed);
                }
            }
            Err(_) => {
                if self.config.logging.log_unmatched {
                    tracing::warn!(path = %path, routes = self.routes.len(), "Failed to match path");
                } else {
                    tracing::debug!(path = %path, routes = self.routes.len(), "Failed to match path");
                }
                if let Some(observer) = &self.observer {
                    observer.match_failed(&path, elapsed);
                }
            }
        }

        result
    }

    /// Resolve an alias with its context, then resolve the resulting path.
    pub fn resolve_alias<C: 'static>(&self, alias: &Alias<C>, context: C) -> RouteResult<R> {
        let identifier = alias.identifier();
        let start = Instant::now();
        if let Some(observer) = &self.observer {
            observer.alias_started(identifier);
        }

        let result = self
            .find_alias(identifier)
            .and_then(|entry| entry.apply(Box::new(context)))
            .and_then(|path| {
                tracing::debug!(identifier, path = %path, "Alias applied");
                self.resolve(path)
            });
        let elapsed = start.elapsed();

        match &result {
            Ok(_) => {
                if let Some(observer) = &self.observer {
                    observer.alias_succeeded(identifier, elapsed);
                }
            }
            Err(error) => {
                // Unmatched target paths were already logged by `resolve`.
                if !matches!(error, RouteError::NoRouteMatched { .. }) {
                    if self.config.logging.log_unmatched {
                        tracing::warn!(identifier, %error, "Failed to resolve alias");
                    } else {
                        tracing::debug!(identifier, %error, "Failed to resolve alias");
                    }
                }
                if let Some(observer) = &self.observer {
                    observer.alias_failed(identifier, elapsed, error);
                }
            }
        }

        result
    }

    /// Route descriptions, in registration order.
    pub fn describe_routes(&self) -> Vec<String> {
        self.routes
            .iter()
            .map(|route| route.description().to_string())
            .collect()
    }

    /// Alias descriptions, in registration order.
    pub fn describe_aliases(&self) -> Vec<String> {
        self.aliases
            .iter()
            .map(|alias| alias.description().to_string())
            .collect()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    pub fn has_alias(&self, identifier: &str) -> bool {
        self.aliases.iter().any(|alias| alias.identifier() == identifier)
    }

    fn match_routes(&self, path: &Path) -> RouteResult<R> {
        for route in self.routes.iter().rev() {
            match route.try_match(path) {
                Ok(result) => {
                    tracing::debug!(path = %path, template = route.template(), "Route matched");
                    return Ok(result);
                }
                Err(reason) => {
                    tracing::trace!(path = %path, template = route.template(), %reason, "Template rejected path");
                }
            }
        }
        Err(RouteError::NoRouteMatched { path: path.clone() })
    }

    fn find_alias(&self, identifier: &str) -> RouteResult<&RegisteredAlias> {
        self.aliases
            .iter()
            .find(|alias| alias.identifier() == identifier)
            .ok_or_else(|| RouteError::AliasNotFound {
                identifier: identifier.to_string(),
            })
    }
}

impl<R: 'static> Default for Router<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Router<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field(
                "routes",
                &self.routes.iter().map(|r| r.description()).collect::<Vec<_>>(),
            )
            .field(
                "aliases",
                &self.aliases.iter().map(|a| a.description()).collect::<Vec<_>>(),
            )
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}
