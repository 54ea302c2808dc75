//! Route registry construction.
//!
//! # Responsibilities
//! - Turn route declarations into an ordered, frozen list of rules
//! - Drop malformed pattern declarations without aborting the build
//! - Surface duplicate normalized patterns in the logs
//!
//! # Design Decisions
//! - Registry order is discovery order: registration order of types, then
//!   declaration order within a type. The matcher relies on this for its
//!   first-match-wins contract.
//! - Duplicates stay in the list; precedence is resolved by scan order,
//!   not by rejecting the later rule.
//! - Immutable after `build`; share the owning `Router` via `Arc` for
//!   concurrent callers.

use tracing::warn;

use crate::routing::handler::{HandlerRef, RouteDecl};
use crate::routing::matcher::normalize;

/// One registered route: the pattern as declared plus its handler.
#[derive(Debug, Clone, Copy)]
pub struct RouteRule {
    pattern: &'static str,
    handler: HandlerRef,
}

impl RouteRule {
    /// The pattern exactly as the handler author declared it.
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn handler(&self) -> HandlerRef {
        self.handler
    }
}

/// Ordered set of route rules, frozen at construction.
#[derive(Debug, Default)]
pub struct Registry {
    rules: Vec<RouteRule>,
}

impl Registry {
    /// Build a registry from declarations, in the order given.
    ///
    /// A malformed declaration (pattern containing whitespace or control
    /// characters) is skipped with a warning; everything else goes in.
    pub fn build(decls: &[RouteDecl]) -> Self {
        let mut rules: Vec<RouteRule> = Vec::with_capacity(decls.len());

        for decl in decls {
            if is_malformed(decl.pattern) {
                warn!(
                    pattern = decl.pattern,
                    handler = decl.handler.name(),
                    "skipping malformed route pattern"
                );
                continue;
            }
            if let Some(prior) = rules
                .iter()
                .find(|r| normalize(r.pattern) == normalize(decl.pattern))
            {
                warn!(
                    pattern = decl.pattern,
                    handler = decl.handler.name(),
                    shadowed_by = prior.handler.name(),
                    "duplicate route pattern; first-registered rule wins"
                );
            }
            rules.push(RouteRule {
                pattern: decl.pattern,
                handler: decl.handler,
            });
        }

        Self { rules }
    }

    /// Rules in discovery order.
    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// A pattern that could not have come from a well-formed declaration.
///
/// The annotation grammar this replaces took the pattern as a single
/// whitespace-delimited token, so embedded whitespace (or control bytes)
/// marks a declaration error. The empty pattern is legal: it matches the
/// root path.
fn is_malformed(pattern: &str) -> bool {
    pattern.chars().any(|c| c.is_whitespace() || c.is_control())
}
