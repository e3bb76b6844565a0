//! Resolution observer hook.

use std::time::Duration;

use crate::error::RouteError;
use crate::path::Path;

/// Callbacks around each resolution attempt.
///
/// Every method defaults to a no-op. Callbacks run synchronously on the
/// resolving thread. An alias resolution reports its alias events around
/// the path events of the path it resolved to.
pub trait RouterObserver: Send + Sync {
    fn match_started(&self, _path: &Path) {}

    fn match_succeeded(&self, _path: &Path, _elapsed: Duration) {}

    fn match_failed(&self, _path: &Path, _elapsed: Duration) {}

    fn alias_started(&self, _identifier: &str) {}

    fn alias_succeeded(&self, _identifier: &str, _elapsed: Duration) {}

    /// `error` is the reason the alias did not produce a result.
    fn alias_failed(&self, _identifier: &str, _elapsed: Duration, _error: &RouteError) {}
}
