//! Validation command for screen manifests.

use crate::cli::common::{
    CliError, CliResult, ValidationChecks, ValidationMessage, ValidationResponse,
};
use crate::config::EngineConfig;
use crate::models::{validate, ValidationError, ValidationErrorKind};
use crate::parser::parse_manifest;
use clap::Args;
use std::path::PathBuf;

/// Validate a screen manifest for errors and warnings
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to the screen manifest file
    #[arg(short, long, value_name = "FILE")]
    pub manifest: PathBuf,

    /// Path to an engine config file (for the overlap policy)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let config = match &self.config {
            Some(path) => EngineConfig::load(path).map_err(|e| CliError::io(format!("{e:#}")))?,
            None => EngineConfig::default(),
        };

        let resources =
            parse_manifest(&self.manifest).map_err(|e| CliError::validation(format!("{e:#}")))?;

        let report = validate(&resources, config.overlap);

        let mut checks = ValidationChecks::all_passed();
        let mut messages = Vec::new();

        for error in &report.errors {
            *check_slot(&mut checks, error.kind) = "failed".to_string();
            messages.push(to_message("error", error));
        }
        for warning in &report.warnings {
            let slot = check_slot(&mut checks, warning.kind);
            if *slot == "passed" {
                *slot = "warning".to_string();
            }
            messages.push(to_message("warning", warning));
        }

        let response = ValidationResponse {
            valid: report.is_valid(),
            errors: messages,
            checks,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.valid && report.warnings.is_empty() {
            println!(
                "✓ {} valid: {} screens, {} hotspots",
                self.manifest.display(),
                resources.screens.len(),
                resources
                    .screens
                    .iter()
                    .map(|s| s.hotspots.len())
                    .sum::<usize>()
            );
        } else {
            print!("{}", report.format_message());
        }

        if !response.valid {
            return Err(CliError::validation("manifest validation failed"));
        }
        if self.strict && !report.warnings.is_empty() {
            return Err(CliError::validation("warnings present in strict mode"));
        }
        Ok(())
    }
}

fn to_message(severity: &str, error: &ValidationError) -> ValidationMessage {
    ValidationMessage {
        severity: severity.to_string(),
        screen: error.screen.clone(),
        message: error.message.clone(),
    }
}

fn check_slot(checks: &mut ValidationChecks, kind: ValidationErrorKind) -> &mut String {
    match kind {
        ValidationErrorKind::ImageLayout => &mut checks.images,
        ValidationErrorKind::DuplicateHotspot
        | ValidationErrorKind::DuplicateArea
        | ValidationErrorKind::DuplicateLocation
        | ValidationErrorKind::MalformedRect
        | ValidationErrorKind::OutOfBounds
        | ValidationErrorKind::HotspotOverlap => &mut checks.geometry,
        ValidationErrorKind::DuplicateScreen
        | ValidationErrorKind::DuplicateValue
        | ValidationErrorKind::DuplicateColor => &mut checks.names,
        ValidationErrorKind::FileLengthMismatch => &mut checks.file_length,
    }
}
