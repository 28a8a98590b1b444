//! TouchDeck Library
//!
//! This library provides the core of a touchscreen appliance UI: parsing
//! screen manifests into an immutable resource set, resolving touch
//! coordinates to hotspot activations, navigating between screens, and
//! keeping display areas synchronized with application-supplied values.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod models;
pub mod parser;
