//! Active-screen state machine.

use super::error::EngineError;
use super::events::RenderSink;
use crate::models::{ResourceSet, ScreenId};
use tracing::debug;

/// Tracks the active screen and performs transitions.
///
/// States are the declared screens; transitions are explicit `navigate_to`
/// calls issued by the application layer. There are no guard conditions and
/// no terminal state; which hotspot triggers which transition is the
/// caller's policy, not the navigator's.
#[derive(Debug, Clone)]
pub struct ScreenNavigator {
    active: ScreenId,
}

impl ScreenNavigator {
    /// Creates a navigator positioned on the configured start screen.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Configuration`] if `start_screen` is empty or
    /// not a declared screen.
    pub fn new(resources: &ResourceSet, start_screen: &str) -> Result<Self, EngineError> {
        if start_screen.is_empty() {
            return Err(EngineError::configuration("no start screen configured"));
        }
        let active = resources.screen_id(start_screen).ok_or_else(|| {
            EngineError::configuration(format!("start screen '{start_screen}' is not declared"))
        })?;
        Ok(Self { active })
    }

    /// The currently active screen.
    #[must_use]
    pub const fn active(&self) -> ScreenId {
        self.active
    }

    /// Emits the initial "screen entered" notification for the start screen.
    pub fn enter_initial(&self, resources: &ResourceSet, sink: &mut dyn RenderSink) {
        let name = &resources.screen(self.active).name;
        debug!(screen = %name, "entering start screen");
        sink.screen_entered(name);
    }

    /// Transitions to the named screen, unconditionally.
    ///
    /// Emits a "screen entered" notification on success so the rendering
    /// layer redraws the new screen; area bindings persist across the
    /// transition.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownScreen`] if the target is not declared;
    /// the active screen is left unchanged.
    pub fn navigate_to(
        &mut self,
        resources: &ResourceSet,
        name: &str,
        sink: &mut dyn RenderSink,
    ) -> Result<ScreenId, EngineError> {
        let target = resources
            .screen_id(name)
            .ok_or_else(|| EngineError::UnknownScreen {
                name: name.to_string(),
            })?;

        debug!(
            from = %resources.screen(self.active).name,
            to = %name,
            "screen transition"
        );
        self.active = target;
        sink.screen_entered(name);
        Ok(target)
    }
}
