//! The immutable top-level aggregate of all declared UI resources.

use super::color::NamedColor;
use super::group::{Group, GroupMember};
use super::screen::Screen;
use super::value::ValueDef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Dense index of a screen within a [`ResourceSet`].
///
/// Assigned once at build time; all name-based references are resolved to
/// ids during the build so runtime lookups never compare strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenId(pub usize);

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "screen #{}", self.0)
    }
}

/// The immutable owner of all screens, groups, value declarations, and
/// colors.
///
/// Built once at startup from a parsed manifest and treated as read-only for
/// the remainder of the run; the engine derives every specialized view
/// (hit-test index, name lookup) from it instead of re-walking the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSet {
    /// Screens in declaration order
    pub screens: Vec<Screen>,
    /// Groups derived from hotspot tags, sorted by name
    pub groups: Vec<Group>,
    /// Declared value bindings with defaults
    pub values: Vec<ValueDef>,
    /// Named color constants
    pub colors: Vec<NamedColor>,
    /// Declared total length of the screen image file, if present
    pub file_length: Option<u32>,
    screen_ids: HashMap<String, ScreenId>,
}

impl ResourceSet {
    /// Builds a `ResourceSet` from parsed manifest parts.
    ///
    /// Resolves screen names to dense ids and derives the group table from
    /// hotspot tags. Duplicate screen names are tolerated here (the last one
    /// keeps the name mapping) and rejected by validation.
    #[must_use]
    pub fn build(
        screens: Vec<Screen>,
        values: Vec<ValueDef>,
        colors: Vec<NamedColor>,
        file_length: Option<u32>,
    ) -> Self {
        let screen_ids = screens
            .iter()
            .enumerate()
            .map(|(idx, screen)| (screen.name.clone(), ScreenId(idx)))
            .collect();

        let groups = derive_groups(&screens);

        Self {
            screens,
            groups,
            values,
            colors,
            file_length,
            screen_ids,
        }
    }

    /// Resolves a screen name to its id.
    #[must_use]
    pub fn screen_id(&self, name: &str) -> Option<ScreenId> {
        self.screen_ids.get(name).copied()
    }

    /// Gets a screen by id.
    #[must_use]
    pub fn screen(&self, id: ScreenId) -> &Screen {
        &self.screens[id.0]
    }

    /// Gets a screen by name.
    #[must_use]
    pub fn screen_by_name(&self, name: &str) -> Option<&Screen> {
        self.screen_id(name).map(|id| self.screen(id))
    }

    /// Gets a group by name.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Gets a declared value by name.
    #[must_use]
    pub fn value_def(&self, name: &str) -> Option<&ValueDef> {
        self.values.iter().find(|v| v.name == name)
    }

    /// Gets a named color.
    #[must_use]
    pub fn color(&self, name: &str) -> Option<&NamedColor> {
        self.colors.iter().find(|c| c.name == name)
    }

    /// Sum of all declared screen image sizes, for the file-length
    /// cross-check.
    #[must_use]
    pub fn total_image_size(&self) -> u64 {
        self.screens.iter().map(|s| u64::from(s.image.size)).sum()
    }
}

/// Derives the group table from hotspot tags, one group per distinct
/// non-empty tag, members in screen/declaration order.
fn derive_groups(screens: &[Screen]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();

    for screen in screens {
        for hotspot in &screen.hotspots {
            if !hotspot.is_grouped() {
                continue;
            }
            let pos = groups
                .iter()
                .position(|g| g.name == hotspot.tag)
                .unwrap_or_else(|| {
                    groups.push(Group::new(hotspot.tag.clone()));
                    groups.len() - 1
                });
            groups[pos].members.push(GroupMember {
                screen: screen.name.clone(),
                hotspot: hotspot.id.clone(),
            });
        }
    }

    groups.sort_by(|a, b| a.name.cmp(&b.name));
    groups
}
