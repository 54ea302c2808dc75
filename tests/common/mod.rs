//! Shared fixtures for integration tests: the demo controllers.

use routable::{HandlerRef, RouteDecl, Routable, Router};

pub struct UserController;

impl UserController {
    fn index() -> String {
        "User/Index".to_string()
    }

    fn profile() -> String {
        "User/Profile".to_string()
    }
}

impl Routable for UserController {
    fn routes() -> Vec<RouteDecl> {
        vec![
            RouteDecl::new("/user/index", HandlerRef::new("user.index", Self::index)),
            RouteDecl::new("/user/profile", HandlerRef::new("user.profile", Self::profile)),
        ]
    }
}

pub struct NewsController;

impl NewsController {
    fn index() -> String {
        "News/Index".to_string()
    }
}

impl Routable for NewsController {
    fn routes() -> Vec<RouteDecl> {
        vec![RouteDecl::new("/news", HandlerRef::new("news.index", Self::index))]
    }
}

pub struct DefaultController;

impl DefaultController {
    fn index() -> String {
        "Default/Index".to_string()
    }

    fn not_found() -> String {
        "no route found".to_string()
    }
}

impl Routable for DefaultController {
    fn routes() -> Vec<RouteDecl> {
        vec![
            RouteDecl::new("/default/index", HandlerRef::new("default.index", Self::index)),
            // Declared without a leading slash on purpose; normalization
            // makes it reachable at /default/notfound anyway.
            RouteDecl::new("default/notfound", HandlerRef::new("default.not_found", Self::not_found)),
        ]
    }
}

/// The standard demo router: three controllers, not-found fallback.
pub fn demo_router() -> Router {
    Router::builder()
        .register::<UserController>()
        .register::<NewsController>()
        .register::<DefaultController>()
        .fallback_named("default.not_found")
        .build()
        .expect("demo router builds")
}
