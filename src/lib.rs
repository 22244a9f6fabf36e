//! Blocking entry point.
//!
//! Prints a startup line, blocks on a wait gate that nothing sets, and exits
//! cleanly with a shutdown line when the process is interrupted.
//!
//! ```text
//!   start ──▶ "Waiting indefinitely..." ──▶ RUNNING (blocked on gate)
//!                                              │
//!                                      SIGINT / Ctrl+C
//!                                              ▼
//!             "Program interrupted. Exiting." ◀── TERMINATED (exit 0)
//! ```

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;

pub use config::WaitConfig;
pub use error::{WaitError, WaitResult};
pub use lifecycle::{run, BlockingEntryPoint, Outcome, RunState, WaitGate};
