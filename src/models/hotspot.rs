//! Touch-sensitive hotspot definitions.

use super::geometry::Rect;
use serde::{Deserialize, Serialize};

/// A named rectangular touch-sensitive region on one screen.
///
/// Hotspot ids are unique within a screen but deliberately repeat across
/// screens: the same logical key (`Key_7`) exists on every screen that shows
/// it, each time with screen-specific geometry. The `tag` names the logical
/// class of the hotspot ("Digit", "Function", ...) and doubles as its group
/// membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotspot {
    /// Logical key identifier (e.g. "Key_7")
    pub id: String,
    /// Logical class / group tag (e.g. "Digit"); empty for untagged hotspots
    pub tag: String,
    /// Touch-sensitive rectangle, inclusive bounds
    pub rect: Rect,
}

impl Hotspot {
    /// Creates a new `Hotspot`.
    pub fn new(id: impl Into<String>, tag: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
            rect,
        }
    }

    /// Returns true if this hotspot carries a group tag.
    #[must_use]
    pub fn is_grouped(&self) -> bool {
        !self.tag.is_empty()
    }
}
