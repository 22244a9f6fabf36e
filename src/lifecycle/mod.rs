//! Lifecycle of the blocking entry point.
//!
//! # Data Flow
//! ```text
//! Startup (runner.rs):
//!     Install interrupt hook (signals.rs) → print startup line → wait on gate (gate.rs)
//!
//! Shutdown:
//!     SIGINT / Ctrl+C → abandon wait → print shutdown line → exit 0
//! ```
//!
//! # Design Decisions
//! - The hook is installed before the startup line, so no interrupt is lost
//! - Only the interrupt signal is hooked; everything else keeps the OS default
//! - One thread, no timeout: the wait ends only by interrupt or an explicit `set`

pub mod gate;
pub mod runner;
pub mod signals;
pub mod state;

pub use gate::WaitGate;
pub use runner::{run, BlockingEntryPoint, Outcome};
pub use signals::Interrupt;
pub use state::RunState;
