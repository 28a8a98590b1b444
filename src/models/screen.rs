//! Screen definitions: one visual display state with its touch regions.

use super::area::{Area, Location};
use super::hotspot::Hotspot;
use super::image::ImageInfo;
use serde::{Deserialize, Serialize};

/// One visual display state: a backing image, its touch-sensitive hotspots,
/// display areas, and named locations.
///
/// Hotspot order is declaration order from the manifest and is significant:
/// hit testing scans the list front to back and the first containing
/// rectangle wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    /// Screen identifier (e.g. "KeypadUp")
    pub name: String,
    /// Backing image layout
    pub image: ImageInfo,
    /// Touch-sensitive regions in declaration order
    pub hotspots: Vec<Hotspot>,
    /// Display areas for bound values
    pub areas: Vec<Area>,
    /// Named anchor points for the renderer
    pub locations: Vec<Location>,
}

impl Screen {
    /// Creates a new `Screen` with no hotspots, areas, or locations.
    pub fn new(name: impl Into<String>, image: ImageInfo) -> Self {
        Self {
            name: name.into(),
            image,
            hotspots: Vec::new(),
            areas: Vec::new(),
            locations: Vec::new(),
        }
    }

    /// Returns true if the coordinate lies within the screen's declared
    /// image bounds.
    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.image.width && (y as u32) < self.image.height
    }

    /// Looks up a hotspot by id.
    #[must_use]
    pub fn hotspot(&self, id: &str) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| h.id == id)
    }

    /// Looks up an area by id.
    #[must_use]
    pub fn area(&self, id: &str) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }

    /// Looks up a location by id.
    #[must_use]
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }
}
