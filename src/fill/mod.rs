//! Setter-driven object filling.
//!
//! # Data Flow
//! ```text
//! Fillable::setters() → declared setter table (name + fn(&mut Self, String))
//!     → fill_from_setters invokes each setter with its own name as value
//!     → object fields populated with predictable placeholder data
//! ```
//!
//! # Design Decisions
//! - Explicit setter tables replace a runtime scan for `set*` methods,
//!   mirroring how `Routable` replaces the route annotation scan
//! - The value passed to a setter is its declared name, so filled objects
//!   are self-describing in test output
//! - No validation, no type coercion: every setter takes a `String`

pub mod setters;

pub use setters::{fill_from_setters, Fillable, SetterRef};
