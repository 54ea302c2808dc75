//! URL routing by explicit registration.
//!
//! Maps path strings to zero-argument handler functions that return fixed
//! strings. Handler types opt in by implementing [`Routable`] and declaring
//! their route patterns; a [`Router`] is assembled once at startup and is
//! immutable afterwards.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     RouterBuilder
//!         → register::<T: Routable>() per handler type, in caller order
//!         → fallback(..) or fallback_named(..)
//!         → build() → Registry (ordered RouteRules) → frozen Router
//!
//! Per lookup:
//!     router.route(path)
//!         → matcher (normalize, linear scan, first match wins)
//!         → dispatch (invoke HandlerRef)
//!         → result string, or the fallback's result on no match
//! ```

pub mod config;
pub mod fill;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use routing::handler::{HandlerRef, RouteDecl, Routable};
pub use routing::router::{BuildError, Router, RouterBuilder};
