//! Runtime configuration for the engine.
//!
//! This module handles loading and validating the engine's runtime
//! configuration in TOML format. The configuration names the start screen
//! and the hotspot overlap policy; everything else the engine needs comes
//! from the manifest itself.

use crate::models::OverlapPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Engine runtime configuration.
///
/// ```toml
/// start-screen = "KeypadUp"
/// overlap = "declaration-order"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct EngineConfig {
    /// Screen the navigator starts on. Required before the engine can be
    /// built; an empty name is a configuration error at startup.
    #[serde(default)]
    pub start_screen: String,

    /// Policy for hotspots with overlapping rectangles.
    #[serde(default)]
    pub overlap: OverlapPolicy,
}

impl EngineConfig {
    /// Creates a configuration with the given start screen and the default
    /// overlap policy.
    pub fn with_start_screen(start_screen: impl Into<String>) -> Self {
        Self {
            start_screen: start_screen.into(),
            overlap: OverlapPolicy::default(),
        }
    }

    /// Loads the configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parses the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Invalid config syntax")?;
        Ok(config)
    }

    /// Returns true if a start screen has been configured.
    #[must_use]
    pub fn has_start_screen(&self) -> bool {
        !self.start_screen.is_empty()
    }
}
