//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router::resolve / Router::resolve_alias
//!     → tracing events (registration, match, rejection, not-found)
//!     → observer.rs (optional RouterObserver callbacks with elapsed time)
//!         → metrics.rs (MetricsObserver: counters, histograms)
//!
//! Binaries:
//!     → logging.rs (install tracing-subscriber with EnvFilter)
//! ```
//!
//! # Design Decisions
//! - Observers are a side channel; they cannot alter a resolution
//! - Library code only emits events, it never installs a subscriber
//! - Metrics go through the `metrics` facade and cost nothing without a
//!   recorder

pub mod logging;
pub mod metrics;
pub mod observer;

pub use self::metrics::MetricsObserver;
pub use observer::RouterObserver;
