//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → stdout, or whatever subscriber the host application installs
//! ```
//!
//! # Design Decisions
//! - Structured events (tracing) rather than print statements
//! - Log level comes from RUST_LOG when set, else from config
//! - Init is idempotent so tests and embedding hosts can both call it

pub mod logging;
