//! View-path builders driven through the router end to end.
//!
//! Covers the application hierarchy (type → app → service → partition →
//! replica), the deployed (per-node) hierarchy, and the single-encode
//! window the `navigate` helper opens around its producer.

use console_navigator::{ConsoleRouter, Route, ViewPaths};

fn app_router() -> ConsoleRouter {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut router = ConsoleRouter::new();
    router.add_route(Route::new("node/:name").view("node").children(vec![
        Route::new(""),
        Route::new("details"),
        Route::new("deployedapp/:appId").view("deployedapp").children(vec![
            Route::new(""),
            Route::new("deployedservice/:serviceId").view("deployedservice"),
        ]),
    ]));
    router.add_route(
        Route::new("apptype/:appTypeName")
            .view("apptype")
            .children(vec![
                Route::new(""),
                Route::new("app/:appId").view("app").children(vec![
                    Route::new(""),
                    Route::new("details"),
                    Route::new("deployments"),
                    Route::new("service/:serviceId").view("service").children(vec![
                        Route::new(""),
                        Route::new("partition/:partitionId").view("partition"),
                    ]),
                ]),
            ]),
    );
    router
}

#[test]
fn navigate_single_encodes_for_the_address_bar() {
    let mut router = app_router();
    let paths = ViewPaths::new();

    let result = paths.navigate(&mut router, |p| p.node_view_path("seed 1"));

    assert!(result.is_success());
    assert_eq!(router.current_path(), "/node/seed%201");
    // Outside the navigate window the builders double-encode again.
    assert_eq!(paths.node_view_path("seed 1"), "/node/seed%25201");
}

#[test]
fn restored_tab_rides_on_the_decoded_url() {
    let mut router = app_router();
    let paths = ViewPaths::new();

    paths.navigate(&mut router, |p| p.node_view_path("seed 1"));
    router.push("/node/seed%201/details");
    paths.navigate(&mut router, |p| p.node_view_path("seed 2"));

    router.settle();
    // The redirect decodes the navigated URL before appending the tab.
    assert_eq!(router.current_path(), "/node/seed 2/details");
}

#[test]
fn sibling_apps_restore_selected_tab() {
    let mut router = app_router();
    let paths = ViewPaths::new();

    let deep_link =
        paths.navigate(&mut router, |p| p.app_view_path("VisualObjectsType", "app-1"));
    assert!(deep_link.is_success());

    router.push("/apptype/VisualObjectsType/app/app-1/deployments");
    router.push("/apptype/VisualObjectsType/app/app-2");
    router.settle();

    assert_eq!(
        router.current_path(),
        "/apptype/VisualObjectsType/app/app-2/deployments"
    );
}

#[test]
fn service_and_partition_links_resolve() {
    let mut router = app_router();
    let paths = ViewPaths::new();

    let service = paths.navigate(&mut router, |p| {
        p.service_view_path("VisualObjectsType", "app-1", "svc-1")
    });
    assert!(service.is_success());

    let partition = paths.navigate(&mut router, |p| {
        p.partition_view_path("VisualObjectsType", "app-1", "svc-1", "part-1")
    });
    assert!(partition.is_success());
    assert_eq!(
        router.current_path(),
        "/apptype/VisualObjectsType/app/app-1/service/svc-1/partition/part-1"
    );
}

#[test]
fn deployed_service_links_resolve_with_and_without_activation() {
    let mut router = app_router();
    let paths = ViewPaths::new();

    let shared = paths.navigate(&mut router, |p| {
        p.deployed_service_view_path("seed-1", "app-1", "svc-1", None)
    });
    assert!(shared.is_success());
    assert_eq!(
        router.current_path(),
        "/node/seed-1/deployedapp/app-1/deployedservice/svc-1"
    );

    // An activation id adds a segment pair the registry above doesn't
    // model, so the deep link must *not* resolve against it.
    let exclusive = paths.navigate(&mut router, |p| {
        p.deployed_service_view_path("seed-1", "app-1", "svc-1", Some("act-1"))
    });
    assert!(exclusive.is_not_found());
}

#[test]
fn encoded_identifiers_round_trip_as_single_segments() {
    let mut router = app_router();
    let paths = ViewPaths::new();

    // A slash inside an application id stays inside one path segment.
    let result = paths.navigate(&mut router, |p| {
        p.app_view_path("VisualObjectsType", "fabric:/VisualObjects")
    });

    assert!(result.is_success());
    assert_eq!(
        router.current_path(),
        "/apptype/VisualObjectsType/app/fabric%3A%2FVisualObjects"
    );
}
