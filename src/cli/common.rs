//! Shared types for CLI command handlers.

use serde::Serialize;

/// Stable process exit codes for scripting and CI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Manifest failed validation
    ValidationFailed = 1,
    /// I/O or usage failure
    Error = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

/// A CLI-level failure: message plus the exit code to report.
#[derive(Debug)]
pub struct CliError {
    /// User-facing message
    pub message: String,
    /// Process exit code
    pub code: ExitCode,
}

impl CliError {
    /// An I/O or environment failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: ExitCode::Error,
        }
    }

    /// A validation failure (distinct exit code for scripting).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: ExitCode::ValidationFailed,
        }
    }
}

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Per-check status in a validation response: "passed", "warning", or
/// "failed".
#[derive(Debug, Clone, Serialize)]
pub struct ValidationChecks {
    /// Image layout arithmetic (stride/size/depth)
    pub images: String,
    /// Hotspot/area/location geometry and uniqueness
    pub geometry: String,
    /// Screen/value/color name uniqueness
    pub names: String,
    /// Screen file length cross-check
    pub file_length: String,
}

impl ValidationChecks {
    /// All checks passing.
    #[must_use]
    pub fn all_passed() -> Self {
        Self {
            images: "passed".to_string(),
            geometry: "passed".to_string(),
            names: "passed".to_string(),
            file_length: "passed".to_string(),
        }
    }
}

/// One validation finding in a response.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationMessage {
    /// "error" or "warning"
    pub severity: String,
    /// Screen context, if the finding is screen-scoped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen: Option<String>,
    /// Human-readable message
    pub message: String,
}

/// JSON response body for `validate`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    /// True if no errors were found
    pub valid: bool,
    /// Errors and warnings in detection order
    pub errors: Vec<ValidationMessage>,
    /// Per-check status summary
    pub checks: ValidationChecks,
}
