//! Shared fixtures for integration tests.

use std::sync::Mutex;
use std::time::Duration;

use typed_router::{Alias, Path, RouteError, Router, RouterObserver, TemplateFactory};

#[allow(dead_code)]
pub const PRODUCT: Alias<u64> = Alias::new("product");

/// A router resembling a small storefront.
#[allow(dead_code)]
pub fn catalog_router() -> Router<String> {
    let mut router = Router::new();

    router.add_path("home", || "home".to_string()).unwrap();

    router
        .add_path("product/:category/:page", |category: String, page: u32| {
            format!("category:{}:{}", category, page)
        })
        .unwrap();

    let details = TemplateFactory::start()
        .paths(["product", "details"])
        .placeholder::<u64>("id")
        .build()
        .unwrap();
    router.add(details, |id: u64| format!("details:{}", id));

    router.add_alias(&PRODUCT, |id: u64| {
        Some(Path::new(format!("product/details/{}", id)))
    });

    router
}

/// Observer that records every callback as a string.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingObserver {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl RouterObserver for RecordingObserver {
    fn match_started(&self, path: &Path) {
        self.push(format!("match_started {}", path));
    }

    fn match_succeeded(&self, path: &Path, _elapsed: Duration) {
        self.push(format!("match_succeeded {}", path));
    }

    fn match_failed(&self, path: &Path, _elapsed: Duration) {
        self.push(format!("match_failed {}", path));
    }

    fn alias_started(&self, identifier: &str) {
        self.push(format!("alias_started {}", identifier));
    }

    fn alias_succeeded(&self, identifier: &str, _elapsed: Duration) {
        self.push(format!("alias_succeeded {}", identifier));
    }

    fn alias_failed(&self, identifier: &str, _elapsed: Duration, error: &RouteError) {
        self.push(format!("alias_failed {} ({})", identifier, error));
    }
}
