//! Engine error types.

use crate::models::ValidationReport;
use thiserror::Error;

/// Errors surfaced by the engine.
///
/// Configuration faults are fatal at startup; navigation to an unknown
/// screen is recoverable and leaves the engine state unchanged. Touch
/// handling and value updates never fail.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The resource set or engine configuration is inconsistent. Detected at
    /// load time, never at runtime.
    #[error("configuration error: {message}")]
    Configuration {
        /// What is wrong, possibly a multi-line validation report
        message: String,
    },

    /// Navigation target is not a declared screen. The active screen is left
    /// unchanged.
    #[error("unknown screen '{name}'")]
    UnknownScreen {
        /// The undeclared screen name
        name: String,
    },
}

impl EngineError {
    /// Builds a configuration error from a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Builds a configuration error from a failed validation report.
    #[must_use]
    pub fn from_report(report: &ValidationReport) -> Self {
        Self::Configuration {
            message: report.format_message(),
        }
    }
}
