//! Alias registration and resolution.

use std::sync::Arc;

use typed_router::config::parse_config;
use typed_router::{Alias, Path, RouteError, Router};

mod common;

#[test]
fn test_alias_chains_to_route() {
    let router = common::catalog_router();

    assert_eq!(router.resolve_alias(&common::PRODUCT, 42).unwrap(), "details:42");
    assert_eq!(
        router.resolve_alias(&common::PRODUCT, 42),
        router.resolve("product/details/42")
    );
}

#[test]
fn test_alias_resolution_equals_direct_resolution() {
    let mut router: Router<String> = Router::new();
    router.add_path("items/:id", |id: u64| format!("item {}", id)).unwrap();

    let foo: Alias<u64> = Alias::new("foo");
    router.add_alias(&foo, |id: u64| Some(Path::new(format!("items/{}", id))));

    assert_eq!(router.resolve_alias(&foo, 42), router.resolve("items/42"));
    assert_eq!(router.resolve_alias(&foo, 42).unwrap(), "item 42");
}

#[test]
fn test_reregistration_replaces() {
    let mut router: Router<String> = Router::new();
    router.add_path("a", || "a".to_string()).unwrap();
    router.add_path("b", || "b".to_string()).unwrap();

    let foo: Alias<()> = Alias::new("foo");
    router.add_alias(&foo, |()| Some(Path::new("a")));
    router.add_alias(&Alias::<()>::new("bar"), |()| Some(Path::new("a")));
    router.add_alias(&foo, |()| Some(Path::new("b")));

    assert_eq!(router.alias_count(), 2);
    assert_eq!(router.resolve_alias(&foo, ()).unwrap(), "b");
    // Replacement moves the alias to the end of the list.
    assert_eq!(
        router.describe_aliases(),
        vec!["Alias<()>('bar')", "Alias<()>('foo')"]
    );
}

#[test]
fn test_replacement_may_change_context_type() {
    let mut router: Router<String> = Router::new();
    router.add_path("user/:name", |name: String| name).unwrap();

    router.add_alias(&Alias::<u64>::new("user"), |id: u64| {
        Some(Path::new(format!("user/{}", id)))
    });
    let by_name: Alias<String> = Alias::new("user");
    router.add_alias(&by_name, |name: String| Some(Path::new("user").join(name)));

    assert_eq!(router.resolve_alias(&by_name, "ada".to_string()).unwrap(), "ada");
    assert_eq!(
        router.resolve_alias(&Alias::<u64>::new("user"), 1),
        Err(RouteError::AliasContextMismatch {
            identifier: "user".into(),
            expected: "String",
        })
    );
}

#[test]
fn test_failure_taxonomy() {
    let mut router = common::catalog_router();

    assert_eq!(
        router.resolve_alias(&Alias::<u64>::new("unknown"), 1),
        Err(RouteError::AliasNotFound {
            identifier: "unknown".into()
        })
    );

    let search: Alias<String> = Alias::new("search");
    router.add_alias(&search, |query: String| {
        (!query.is_empty()).then(|| Path::new("search").join(query))
    });
    assert_eq!(
        router.resolve_alias(&search, String::new()),
        Err(RouteError::AliasContextRejected {
            identifier: "search".into()
        })
    );
    assert_eq!(
        router.resolve_alias(&search, "hats".into()),
        Err(RouteError::NoRouteMatched {
            path: Path::new("search/hats")
        })
    );
}

#[test]
fn test_static_aliases_from_config() {
    let config = parse_config(
        r#"
        [logging]
        log_unmatched = false

        [[aliases]]
        identifier = "featured"
        target = "/product/details/7/"

        [[aliases]]
        identifier = "broken"
        target = "does/not/exist"
        "#,
    )
    .unwrap();

    let mut router: Router<String> = Router::from_config(config);
    router.add_path("product/details/:id", |id: u64| format!("details:{}", id)).unwrap();

    assert!(router.has_alias("featured"));
    assert_eq!(router.resolve_alias(&Alias::new("featured"), ()).unwrap(), "details:7");
    assert!(matches!(
        router.resolve_alias(&Alias::new("broken"), ()),
        Err(RouteError::NoRouteMatched { .. })
    ));
}

#[test]
fn test_alias_events_wrap_path_events() {
    let observer = Arc::new(common::RecordingObserver::default());
    let even: Alias<u64> = Alias::new("even");
    let mut router = common::catalog_router();
    router.add_alias(&even, |n: u64| {
        (n % 2 == 0).then(|| Path::new(format!("product/details/{}", n)))
    });
    let router = router.with_observer(observer.clone());

    router.resolve_alias(&common::PRODUCT, 5).unwrap();
    router.resolve_alias(&Alias::<()>::new("missing"), ()).unwrap_err();
    router.resolve_alias(&even, 3).unwrap_err();
    router.resolve("nope").unwrap_err();

    assert_eq!(
        observer.events(),
        vec![
            "alias_started product",
            "match_started product/details/5",
            "match_succeeded product/details/5",
            "alias_succeeded product",
            "alias_started missing",
            "alias_failed missing (no alias named 'missing')",
            "alias_started even",
            "alias_failed even (alias 'even' returned no path for the given context)",
            "match_started nope",
            "match_failed nope",
        ]
    );
}

#[test]
fn test_observer_does_not_change_outcome() {
    let plain = common::catalog_router();
    let observed = common::catalog_router()
        .with_observer(Arc::new(common::RecordingObserver::default()));

    for path in ["home", "product/details/3", "product/details/x", "x"] {
        assert_eq!(plain.resolve(path), observed.resolve(path));
    }
}
