//! Route matching logic.
//!
//! # Responsibilities
//! - Normalize paths and patterns for lenient comparison
//! - Scan the registry and return the first matching rule
//!
//! # Design Decisions
//! - Matching is case-insensitive and ignores leading/trailing slashes
//! - Both sides are normalized identically; patterns keep their declared
//!   spelling in the registry
//! - Equality only: no regex, no prefixes, so matching is O(rules)
//! - First match in registry order wins

use crate::routing::registry::{Registry, RouteRule};

/// Normalize a path or pattern for comparison: strip leading and trailing
/// `/` and `\`, lowercase the rest. ASCII lowercasing matches the
/// path-segment character set; patterns are declared in ASCII.
pub fn normalize(path: &str) -> String {
    path.trim_matches(|c| c == '/' || c == '\\')
        .to_ascii_lowercase()
}

/// Find the first rule whose normalized pattern equals the normalized path.
pub fn find_match<'r>(registry: &'r Registry, path: &str) -> Option<&'r RouteRule> {
    let wanted = normalize(path);
    registry
        .rules()
        .iter()
        .find(|rule| normalize(rule.pattern()) == wanted)
}
