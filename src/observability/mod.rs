//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging through `tracing`
//! - Logs go to stderr; stdout is reserved for the status lines
//! - Quiet by default (warn), `RUST_LOG` for diagnostics

pub mod logging;

pub use logging::init_logging;
