//! Notifications raised toward the rendering collaborator.

use crate::models::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// A notification the engine raises for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// The active screen changed (or the engine started); redraw the screen
    /// image and its bound areas.
    ScreenEntered {
        /// Name of the screen that became active
        screen: String,
    },
    /// A bound value changed; redraw the area.
    AreaRefresh {
        /// Screen owning the area
        screen: String,
        /// Area id
        area: String,
        /// The value to render
        value: Value,
    },
}

/// Receiver for render notifications.
///
/// The engine never draws anything itself; it only raises these
/// notifications. Implementations blit the screen image and render area
/// content however the target hardware requires.
pub trait RenderSink {
    /// Called when a screen becomes active.
    fn screen_entered(&mut self, screen: &str);

    /// Called when a bound area must be redrawn with a new value.
    fn area_refresh(&mut self, screen: &str, area: &str, value: &Value);
}

/// A sink that discards all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn screen_entered(&mut self, _screen: &str) {}
    fn area_refresh(&mut self, _screen: &str, _area: &str, _value: &Value) {}
}

/// A sink that records every notification, for tests and headless harnesses.
///
/// The event log is shared through an `Rc` handle so it stays readable after
/// the sink has been moved into the engine. Single-threaded by design, like
/// the engine itself.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<RenderEvent>>>,
}

impl RecordingSink {
    /// Creates a new recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle to the shared event log.
    #[must_use]
    pub fn events(&self) -> Rc<RefCell<Vec<RenderEvent>>> {
        Rc::clone(&self.events)
    }
}

impl RenderSink for RecordingSink {
    fn screen_entered(&mut self, screen: &str) {
        self.events.borrow_mut().push(RenderEvent::ScreenEntered {
            screen: screen.to_string(),
        });
    }

    fn area_refresh(&mut self, screen: &str, area: &str, value: &Value) {
        self.events.borrow_mut().push(RenderEvent::AreaRefresh {
            screen: screen.to_string(),
            area: area.to_string(),
            value: value.clone(),
        });
    }
}
