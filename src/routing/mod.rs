//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration:
//!     Template<P> + handler
//!     → route.rs (TypedRoute, erased behind Resolvable<R>)
//!     → router.rs (appended to the route list)
//!
//!     Alias<C> + Fn(C) -> Option<Path>
//!     → alias.rs (RegisteredAlias, context erased to Box<dyn Any>)
//!     → router.rs (replaces any alias with the same identifier)
//!
//! Resolution:
//!     Path
//!     → router.rs (scan routes newest-first)
//!     → first template that matches runs its handler
//!     → Ok(R) or RouteError::NoRouteMatched
//!
//!     Alias<C> + context
//!     → lookup by identifier → downcast context → apply → Path
//!     → path resolution as above
//! ```
//!
//! # Design Decisions
//! - Later registrations shadow earlier ones for overlapping templates
//! - A template that fails to decode falls through to older routes
//! - Not-found outcomes are values, never panics
//! - No internal locking; callers synchronize shared routers

mod alias;
mod handler;
mod route;
mod router;

pub use handler::Handler;
pub use router::Router;
