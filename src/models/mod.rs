//! Data models for screens, hotspots, areas, and value bindings.
//!
//! This module contains the canonical in-memory representation of a screen
//! manifest. Models are produced once at load time and read-only at runtime;
//! the engine derives its lookup structures from them.

pub mod area;
pub mod color;
pub mod geometry;
pub mod group;
pub mod hotspot;
pub mod image;
pub mod resource_set;
pub mod screen;
pub mod validation;
pub mod value;

// Re-export all model types
pub use area::{Area, Location};
pub use color::{NamedColor, Rgb};
pub use geometry::Rect;
pub use group::{Group, GroupMember};
pub use hotspot::Hotspot;
pub use image::{ColorDepth, ImageInfo};
pub use resource_set::{ResourceSet, ScreenId};
pub use screen::Screen;
pub use validation::{
    validate, OverlapPolicy, ValidationError, ValidationErrorKind, ValidationReport,
};
pub use value::{Value, ValueDef, ValueKind};
