//! Per-screen spatial index for hotspot hit testing.

use crate::models::{Rect, Screen};

/// Hit-test index for one screen.
///
/// Holds the screen's hotspot rectangles in declaration order plus the image
/// bounds. Lookup is a linear scan; hotspot counts per screen are small
/// (tens at most) so a coarser spatial partition would cost more to build
/// than it saves.
#[derive(Debug, Clone)]
pub struct HotspotIndex {
    width: i32,
    height: i32,
    entries: Vec<Rect>,
}

impl HotspotIndex {
    /// Builds the index from a screen's declaration-ordered hotspot list.
    #[must_use]
    pub fn build(screen: &Screen) -> Self {
        Self {
            width: screen.image.width as i32,
            height: screen.image.height as i32,
            entries: screen.hotspots.iter().map(|h| h.rect).collect(),
        }
    }

    /// Resolves a coordinate to the index of the hotspot containing it.
    ///
    /// Coordinates outside the screen's image bounds resolve to `None`
    /// without scanning; that is a normal "tap on empty space" outcome, not
    /// an error. When rectangles overlap, the first one in declaration order
    /// wins.
    #[must_use]
    pub fn hit(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.entries.iter().position(|rect| rect.contains(x, y))
    }

    /// Number of indexed hotspots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the screen declares no hotspots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
