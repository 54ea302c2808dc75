//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (at startup):
//!     Routable::routes() per registered type
//!     → RouteDecl[] in discovery order
//!     → registry.rs (drop malformed declarations, freeze RouteRule list)
//!     → immutable Registry
//!
//! Lookup:
//!     router.route(path)
//!     → matcher.rs (normalize both sides, linear scan)
//!     → dispatch.rs (invoke the matched HandlerRef)
//!     → Return: handler result, or fallback result on no match
//! ```
//!
//! # Design Decisions
//! - Registry built once, immutable at runtime (thread-safe without locks)
//! - Equality matching only: no prefixes, no wildcards, no route parameters
//! - First match in discovery order wins, including duplicate patterns
//! - No-match is not an error; the fallback handler always answers

pub mod dispatch;
pub mod handler;
pub mod matcher;
pub mod registry;
pub mod router;
