//! End-to-end routing behavior over the demo controllers.

mod common;

use common::{demo_router, DefaultController, NewsController, UserController};
use routable::{HandlerRef, RouteDecl, Routable, Router, RouterConfig};

#[test]
fn test_routing_table() {
    let router = demo_router();

    let tests = [
        ("/user/index", "User/Index"),
        ("/user/profile", "User/Profile"),
        ("/news", "News/Index"),
        ("/default/index", "Default/Index"),
        ("/default/notfound", "no route found"),
        ("/afsdooasofdsa/asdf", "no route found"),
    ];

    for (path, expected) in tests {
        assert_eq!(router.route(path), expected, "path {:?}", path);
    }
}

#[test]
fn test_route_is_idempotent() {
    let router = demo_router();
    assert_eq!(router.route("/user/index"), "User/Index");
    assert_eq!(router.route("/user/index"), "User/Index");
}

#[test]
fn test_normalization_is_case_and_slash_insensitive() {
    let router = demo_router();

    for path in ["/USER/INDEX", "user/index", "/user/index/", "\\user\\index"] {
        assert_eq!(router.route(path), "User/Index", "path {:?}", path);
    }
}

#[test]
fn test_unmatched_path_hits_the_fallback() {
    let router = demo_router();
    assert_eq!(router.route("/nonexistent/path"), "no route found");
    assert_eq!(router.route(""), "no route found");
}

#[test]
fn test_discovery_order_is_stable_across_rebuilds() {
    let snapshot = |router: &Router| -> Vec<(String, String)> {
        router
            .registry()
            .rules()
            .iter()
            .map(|r| (r.pattern().to_string(), r.handler().name().to_string()))
            .collect()
    };

    let first = snapshot(&demo_router());
    let second = snapshot(&demo_router());

    assert_eq!(first, second);
    assert_eq!(first[0].0, "/user/index");
}

#[test]
fn test_registration_order_decides_precedence() {
    // user.index declares /user/index; a later controller declaring the
    // same pattern never gets the request.
    struct Shadow;

    impl Shadow {
        fn index() -> String {
            "Shadow/Index".to_string()
        }
    }

    impl Routable for Shadow {
        fn routes() -> Vec<RouteDecl> {
            vec![RouteDecl::new("user/index/", HandlerRef::new("shadow.index", Self::index))]
        }
    }

    let router = Router::builder()
        .register::<UserController>()
        .register::<Shadow>()
        .register::<DefaultController>()
        .fallback_named("default.not_found")
        .build()
        .unwrap();

    assert_eq!(router.route("/user/index"), "User/Index");

    // Reversed registration reverses the winner.
    let router = Router::builder()
        .register::<Shadow>()
        .register::<UserController>()
        .register::<DefaultController>()
        .fallback_named("default.not_found")
        .build()
        .unwrap();

    assert_eq!(router.route("/user/index"), "Shadow/Index");
}

#[test]
fn test_malformed_declaration_is_skipped_not_fatal() {
    struct Broken;

    impl Broken {
        fn fine() -> String {
            "fine".to_string()
        }

        fn unreachable() -> String {
            "unreachable".to_string()
        }
    }

    impl Routable for Broken {
        fn routes() -> Vec<RouteDecl> {
            vec![
                RouteDecl::new("/broken path", HandlerRef::new("broken.bad", Self::unreachable)),
                RouteDecl::new("/broken/fine", HandlerRef::new("broken.fine", Self::fine)),
            ]
        }
    }

    let router = Router::builder()
        .register::<Broken>()
        .register::<DefaultController>()
        .fallback_named("default.not_found")
        .build()
        .unwrap();

    assert_eq!(router.route("/broken/fine"), "fine");
    assert_eq!(router.route("/broken path"), "no route found");
}

#[test]
fn test_default_config_names_the_demo_fallback() {
    let config = RouterConfig::default();

    let router = Router::builder()
        .register::<UserController>()
        .register::<NewsController>()
        .register::<DefaultController>()
        .config(&config)
        .build()
        .unwrap();

    assert_eq!(router.route("/no/such/route"), "no route found");
}
