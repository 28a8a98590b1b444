//! Hotspot groups derived from logical tags.

use serde::{Deserialize, Serialize};

/// One member of a group: a hotspot reference qualified by its screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    /// Screen the hotspot lives on
    pub screen: String,
    /// Hotspot id on that screen
    pub hotspot: String,
}

/// A named collection of hotspots sharing an activation semantic.
///
/// Groups span screens: every hotspot carrying the group's tag is a member,
/// regardless of which screen declares it. They exist for batch
/// classification (a single fallback handler for "all digit keys") rather
/// than per-key logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group name (the hotspot tag, e.g. "Digit")
    pub name: String,
    /// Member hotspots in declaration order across screens
    pub members: Vec<GroupMember>,
}

impl Group {
    /// Creates a new empty `Group`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Number of member hotspots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
