//! Configuration management.
//!
//! # Data Flow
//! ```text
//! WaitConfig::default()  (binary)
//! WaitConfig from serde   (library callers)
//!     → validation.rs (semantic checks, run by lifecycle::run)
//!     → WaitConfig (validated, immutable)
//!     → handed to BlockingEntryPoint
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; the defaults are the program's exact output
//! - Validation separates syntactic (serde) from semantic checks

pub mod schema;
pub mod validation;

pub use schema::MessageConfig;
pub use schema::ObservabilityConfig;
pub use schema::WaitConfig;
pub use validation::{validate_config, ValidationError};
