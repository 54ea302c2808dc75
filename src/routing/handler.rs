//! Handler authoring surface.
//!
//! # Responsibilities
//! - Name handler functions so config and logs can refer to them
//! - Let handler types declare their route patterns
//!
//! # Design Decisions
//! - Handlers are plain `fn() -> String`: zero arguments, no side effects,
//!   fixed result. Resolution to a function value happens at declaration
//!   time, never per lookup.
//! - Patterns are stored exactly as declared; normalization is a matching
//!   concern (see `matcher`).

/// A named reference to a handler function.
///
/// The name identifies the handler in logs and in the `fallback.handler`
/// config key; by convention it is `type.method` (e.g. `"user.index"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerRef {
    name: &'static str,
    call: fn() -> String,
}

impl HandlerRef {
    pub const fn new(name: &'static str, call: fn() -> String) -> Self {
        Self { name, call }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the handler. A panic here is a programming error in the
    /// handler and propagates to the caller.
    pub fn call(&self) -> String {
        (self.call)()
    }
}

/// One declared route: a pattern and the handler it maps to.
#[derive(Debug, Clone, Copy)]
pub struct RouteDecl {
    pub pattern: &'static str,
    pub handler: HandlerRef,
}

impl RouteDecl {
    pub const fn new(pattern: &'static str, handler: HandlerRef) -> Self {
        Self { pattern, handler }
    }
}

/// A type whose handler methods can be routed to.
///
/// `routes()` must be deterministic: the returned order is the type's
/// contribution to discovery order, and discovery order decides precedence
/// when two declarations normalize to the same pattern.
pub trait Routable {
    fn routes() -> Vec<RouteDecl>;
}
