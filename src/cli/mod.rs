//! CLI command handlers for TouchDeck.
//!
//! This module provides headless, scriptable access to the engine for
//! automation, testing, and CI integration.

pub mod common;
pub mod inspect;
pub mod simulate;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use inspect::InspectArgs;
pub use simulate::SimulateArgs;
pub use validate::ValidateArgs;
