//! Display areas and named locations.

use super::geometry::Rect;
use serde::{Deserialize, Serialize};

/// A rectangle where a bound value is rendered.
///
/// Areas are declared with an origin and size (unlike hotspots, which use
/// corner pairs); the rectangle is normalized at construction so hit and
/// bounds checks share the same [`Rect`] type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    /// Area identifier (e.g. "Display"); unique within a screen
    pub id: String,
    /// Rendered region
    pub rect: Rect,
}

impl Area {
    /// Creates a new `Area` from the manifest's origin+size form.
    pub fn new(id: impl Into<String>, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            id: id.into(),
            rect: Rect::from_origin_size(x, y, width, height),
        }
    }
}

/// A named anchor point on a screen.
///
/// Locations carry no behavior in the engine; they are passed through to the
/// rendering collaborator as stable drawing coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Location identifier
    pub id: String,
    /// Horizontal pixel coordinate
    pub x: i32,
    /// Vertical pixel coordinate
    pub y: i32,
}

impl Location {
    /// Creates a new `Location`.
    pub fn new(id: impl Into<String>, x: i32, y: i32) -> Self {
        Self { id: id.into(), x, y }
    }
}
