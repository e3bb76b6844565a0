//! Typed path routing.
//!
//! Maps string paths such as `"product/details/42"` to typed handler calls.
//! Placeholder segments are decoded into statically known types, and named
//! aliases resolve to paths through a context value.
//!
//! # Architecture Overview
//!
//! ```text
//!   TemplateFactory ──▶ Template<P> ──┐
//!                                     ├──▶ Router<R> ──▶ resolve(path)          ──▶ Ok(R)
//!   handler Fn(T1..Tn) -> R ──────────┘        │         resolve_alias(a, ctx)  ──▶ Err(RouteError)
//!                                              │
//!   Alias<C> + Fn(C) -> Option<Path> ──────────┘
//!
//!   Cross-cutting: codec (segment <-> value), config (TOML),
//!                  observability (tracing, observer hook, metrics)
//! ```
//!
//! # Example
//!
//! ```
//! use typed_router::{Router, TemplateFactory};
//!
//! let template = TemplateFactory::start()
//!     .path("shop")
//!     .placeholder::<String>("category")
//!     .placeholder::<u32>("page")
//!     .build()
//!     .unwrap();
//!
//! let mut router: Router<String> = Router::new();
//! router.add(template, |category: String, page: u32| format!("{} p{}", category, page));
//!
//! assert_eq!(router.resolve("shop/hats/2").unwrap(), "hats p2");
//! ```

// Core
pub mod codec;
pub mod path;
pub mod routing;
pub mod template;

// Cross-cutting concerns
pub mod config;
pub mod error;
pub mod observability;

pub use codec::PathParam;
pub use config::RouterConfig;
pub use error::{DecodeError, MatchError, RouteError, RouteResult, TemplateError};
pub use observability::{MetricsObserver, RouterObserver};
pub use path::{Alias, Path};
pub use routing::{Handler, Router};
pub use template::{Params, SegmentSpec, Template, TemplateFactory, MAX_ARITY};
