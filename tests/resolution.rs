//! Path resolution through the router.

use std::sync::{Arc, RwLock};

use typed_router::{Path, RouteError, Router, RouterConfig, Template, TemplateFactory};

mod common;

#[test]
fn test_resolves_typed_routes() {
    let router = common::catalog_router();

    assert_eq!(router.resolve("home").unwrap(), "home");
    assert_eq!(router.resolve("product/details/42").unwrap(), "details:42");
    assert_eq!(router.resolve("/product/shoes/3/").unwrap(), "category:shoes:3");
    assert_eq!(router.resolve(Path::new("product/details/7")).unwrap(), "details:7");
    assert_eq!(router.resolve(String::from("home")).unwrap(), "home");
}

#[test]
fn test_overlapping_templates_newest_first() {
    let router = common::catalog_router();
    // The details route is newer, so it shadows the category route.
    assert_eq!(router.resolve("product/details/9").unwrap(), "details:9");
    assert_eq!(router.resolve("product/shoes/9").unwrap(), "category:shoes:9");
    // Neither the u64 nor the u32 placeholder accepts "abc".
    assert_eq!(
        router.resolve("product/details/abc").unwrap_err(),
        RouteError::NoRouteMatched {
            path: Path::new("product/details/abc"),
        }
    );
}

#[test]
fn test_decode_failure_falls_through_to_older_route() {
    let mut router: Router<String> = Router::new();
    router.add_path("x/:name", |name: String| format!("name {}", name)).unwrap();
    router.add_path("x/:id", |id: u64| format!("id {}", id)).unwrap();

    assert_eq!(router.resolve("x/5").unwrap(), "id 5");
    assert_eq!(router.resolve("x/abc").unwrap(), "name abc");
}

#[test]
fn test_later_registration_shadows_earlier() {
    let template: Template<(u64,)> = Template::parse("x/:id").unwrap();
    let mut router: Router<char> = Router::new();
    router.add(template.clone(), |_: u64| 'A');
    router.add(template, |_: u64| 'B');

    assert_eq!(router.resolve("x/5"), Ok('B'));
}

#[test]
fn test_observer_replaces_configured_metrics_observer() {
    let mut config = RouterConfig::default();
    config.metrics.enabled = true;
    let mut router: Router<String> = Router::from_config(config);
    router.add_path("home", || "home".to_string()).unwrap();

    let observer = Arc::new(common::RecordingObserver::default());
    let router = router.with_observer(observer.clone());
    router.resolve("home").unwrap();

    assert_eq!(observer.events(), vec!["match_started home", "match_succeeded home"]);
}

#[test]
fn test_not_found() {
    let router = common::catalog_router();

    let err = router.resolve("nowhere/at/all").unwrap_err();
    assert_eq!(
        err,
        RouteError::NoRouteMatched {
            path: Path::new("nowhere/at/all")
        }
    );
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "no route matches 'nowhere/at/all'");
}

#[test]
fn test_empty_path_matches_only_empty_template() {
    let mut router: Router<&'static str> = Router::new();
    router.add_path("a", || "a").unwrap();
    assert!(router.resolve("").is_err());

    router.add(TemplateFactory::start().build().unwrap(), || "root");
    assert_eq!(router.resolve(""), Ok("root"));
    assert_eq!(router.resolve("/"), Ok("root"));
    assert_eq!(router.resolve("a"), Ok("a"));
}

#[test]
fn test_shared_behind_external_lock() {
    let router = Arc::new(RwLock::new(Router::<u32>::new()));
    router
        .write()
        .unwrap()
        .add_path("n/:n", |n: u32| n * 2)
        .unwrap();

    let reader = Arc::clone(&router);
    let handle = std::thread::spawn(move || reader.read().unwrap().resolve("n/21"));
    assert_eq!(handle.join().unwrap(), Ok(42));
}

#[test]
fn test_describe_routes_in_registration_order() {
    let router = common::catalog_router();
    assert_eq!(
        router.describe_routes(),
        vec![
            "Route('home' () -> String)",
            "Route('product/:category/:page' (String, u32) -> String)",
            "Route('product/details/:id' (u64) -> String)",
        ]
    );
}
