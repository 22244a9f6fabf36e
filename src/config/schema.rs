//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Status line printed before the wait begins.
pub const DEFAULT_STARTUP_MESSAGE: &str = "Waiting indefinitely...";

/// Status line printed after an interrupt ends the wait.
pub const DEFAULT_SHUTDOWN_MESSAGE: &str = "Program interrupted. Exiting.";

/// Root configuration for the blocking entry point.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WaitConfig {
    /// Lines written to stdout.
    pub messages: MessageConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Status lines written to stdout.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct MessageConfig {
    pub startup: String,
    pub shutdown: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            startup: DEFAULT_STARTUP_MESSAGE.to_string(),
            shutdown: DEFAULT_SHUTDOWN_MESSAGE.to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level for this crate's events (trace, debug, info, warn, error).
    /// `RUST_LOG` takes precedence when set.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_program_output() {
        let config = WaitConfig::default();
        assert_eq!(config.messages.startup, "Waiting indefinitely...");
        assert_eq!(config.messages.shutdown, "Program interrupted. Exiting.");
        assert_eq!(config.observability.log_level, "warn");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: WaitConfig = toml::from_str(
            r#"
            [observability]
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.messages, MessageConfig::default());
        assert_eq!(config.observability.log_level, "debug");
    }
}
