//! Router assembly and lookup.
//!
//! # Responsibilities
//! - Collect route declarations from registered handler types
//! - Fix the fallback handler at build time
//! - Answer `route(path)` with a handler result, always
//!
//! # Design Decisions
//! - Explicit construction: the caller registers types and builds once at
//!   startup, instead of a lazily populated process-wide registry
//! - Immutable after `build`; wrap in `Arc` to share across threads
//! - The fallback is configuration, not a registry entry: it is never
//!   matched by pattern, only invoked on no-match

use thiserror::Error;
use tracing::debug;

use crate::config::schema::RouterConfig;
use crate::routing::dispatch::dispatch;
use crate::routing::handler::{HandlerRef, RouteDecl, Routable};
use crate::routing::matcher::find_match;
use crate::routing::registry::Registry;

/// Errors from [`RouterBuilder::build`].
#[derive(Debug, Error)]
pub enum BuildError {
    /// No fallback handler was supplied.
    #[error("no fallback handler configured")]
    MissingFallback,

    /// A named fallback did not resolve against any registered handler.
    #[error("fallback handler {0:?} is not a registered handler")]
    UnknownFallbackHandler(String),
}

enum FallbackSource {
    Handler(HandlerRef),
    Named(String),
}

/// Builder for [`Router`]. Registration order is discovery order.
#[derive(Default)]
pub struct RouterBuilder {
    decls: Vec<RouteDecl>,
    fallback: Option<FallbackSource>,
}

impl RouterBuilder {
    /// Register a handler type. Its declarations are appended after those
    /// of every previously registered type.
    pub fn register<T: Routable>(mut self) -> Self {
        self.decls.extend(T::routes());
        self
    }

    /// Use `handler` as the fallback for unmatched paths.
    pub fn fallback(mut self, handler: HandlerRef) -> Self {
        self.fallback = Some(FallbackSource::Handler(handler));
        self
    }

    /// Use the registered handler named `name` as the fallback. Resolution
    /// happens at build time; an unknown name fails the build.
    pub fn fallback_named(mut self, name: impl Into<String>) -> Self {
        self.fallback = Some(FallbackSource::Named(name.into()));
        self
    }

    /// Apply file-based configuration (currently the fallback handler name).
    pub fn config(self, config: &RouterConfig) -> Self {
        self.fallback_named(config.fallback.handler.clone())
    }

    pub fn build(self) -> Result<Router, BuildError> {
        let fallback = match self.fallback {
            None => return Err(BuildError::MissingFallback),
            Some(FallbackSource::Handler(handler)) => handler,
            Some(FallbackSource::Named(name)) => self
                .decls
                .iter()
                .map(|decl| decl.handler)
                .find(|handler| handler.name() == name)
                .ok_or(BuildError::UnknownFallbackHandler(name))?,
        };

        let registry = Registry::build(&self.decls);
        debug!(
            rules = registry.len(),
            fallback = fallback.name(),
            "router built"
        );

        Ok(Router { registry, fallback })
    }
}

/// Immutable path-to-handler router.
#[derive(Debug)]
pub struct Router {
    registry: Registry,
    fallback: HandlerRef,
}

impl Router {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::default()
    }

    /// Resolve `path` to the result of the first matching handler, or the
    /// fallback's result when nothing matches. Always returns a string.
    pub fn route(&self, path: &str) -> String {
        match find_match(&self.registry, path) {
            Some(rule) => dispatch(rule.handler()),
            None => {
                debug!(path, fallback = self.fallback.name(), "no route matched");
                dispatch(self.fallback)
            }
        }
    }

    /// The frozen registry, in discovery order.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
