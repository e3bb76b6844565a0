//! Metrics collection.
//!
//! # Metrics
//! - `router_resolutions_total` (counter): resolutions by `kind` (path, alias)
//!   and `outcome`
//! - `router_resolution_duration_seconds` (histogram): latency by `kind`
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; the binary chooses the exporter
//! - Outcome labels are a fixed set to keep cardinality bounded

use std::time::Duration;

use crate::error::RouteError;
use crate::observability::observer::RouterObserver;
use crate::path::Path;

/// Record one resolution.
pub fn record_resolution(kind: &'static str, outcome: &'static str, elapsed: Duration) {
    ::metrics::counter!("router_resolutions_total", "kind" => kind, "outcome" => outcome)
        .increment(1);
    ::metrics::histogram!("router_resolution_duration_seconds", "kind" => kind)
        .record(elapsed.as_secs_f64());
}

/// Outcome label for a failed resolution.
pub fn outcome_label(error: &RouteError) -> &'static str {
    match error {
        RouteError::NoRouteMatched { .. } => "no_route",
        RouteError::AliasNotFound { .. } => "alias_not_found",
        RouteError::AliasContextRejected { .. } => "context_rejected",
        RouteError::AliasContextMismatch { .. } => "context_mismatch",
    }
}

/// Observer that records every resolution as metrics.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetricsObserver;

impl RouterObserver for MetricsObserver {
    fn match_succeeded(&self, _path: &Path, elapsed: Duration) {
        record_resolution("path", "matched", elapsed);
    }

    fn match_failed(&self, _path: &Path, elapsed: Duration) {
        record_resolution("path", "no_route", elapsed);
    }

    fn alias_succeeded(&self, _identifier: &str, elapsed: Duration) {
        record_resolution("alias", "matched", elapsed);
    }

    fn alias_failed(&self, _identifier: &str, elapsed: Duration, error: &RouteError) {
        record_resolution("alias", outcome_label(error), elapsed);
    }
}
