//! Handler dispatch.
//!
//! # Responsibilities
//! - Invoke a resolved handler and return its result unchanged
//!
//! # Design Decisions
//! - No argument binding, no return-value transformation
//! - No exception translation: a panicking handler is a programming error
//!   and propagates to the caller

use tracing::debug;

use crate::routing::handler::HandlerRef;

/// Invoke `handler` and hand back its result string.
pub fn dispatch(handler: HandlerRef) -> String {
    debug!(handler = handler.name(), "dispatching");
    handler.call()
}
