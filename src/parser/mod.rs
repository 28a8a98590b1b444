//! Parsing for the screen manifest format.
//!
//! This module reads the C-macro style manifests emitted by the offline
//! screen designer into the in-memory resource model.

pub mod manifest;

// Re-export commonly used functions
pub use manifest::{parse_manifest, parse_manifest_str};
