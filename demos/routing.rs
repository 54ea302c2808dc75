//! Routing walkthrough: three controllers, a configured fallback, and a
//! handful of lookups.
//!
//! Run with: cargo run --example routing

use routable::observability::logging;
use routable::{HandlerRef, RouteDecl, Routable, Router, RouterConfig};

struct UserController;

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

struct NewsController;

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

struct DefaultController;

impl DefaultController {
    fn not_found() -> String {
        "no route found".to_string()
    }
}

impl Routable for DefaultController {
    fn routes() -> Vec<RouteDecl> {
        vec![RouteDecl::new(
            "default/notfound",
            HandlerRef::new("default.not_found", Self::not_found),
        )]
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RouterConfig::default();
    logging::init(&config.observability);

    let router = Router::builder()
        .register::<UserController>()
        .register::<NewsController>()
        .register::<DefaultController>()
        .config(&config)
        .build()?;

    for path in [
        "/user/index",
        "/USER/PROFILE/",
        "news",
        "/afsdooasofdsa/asdf",
    ] {
        println!("{path} -> {}", router.route(path));
    }

    Ok(())
}
