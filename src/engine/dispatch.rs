//! The dispatch engine: touch events in, activations and notifications out.

use super::error::EngineError;
use super::events::RenderSink;
use super::index::HotspotIndex;
use super::navigator::ScreenNavigator;
use super::values::ValueStore;
use crate::config::EngineConfig;
use crate::models::{validate, ResourceSet, Screen, Value};
use std::collections::HashMap;
use tracing::{debug, warn};

/// A resolved touch: which hotspot was hit, on which screen, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    /// Screen that was active when the touch arrived
    pub screen: String,
    /// Hotspot id that contained the coordinate
    pub hotspot: String,
    /// The hotspot's group tag; empty if untagged
    pub tag: String,
    /// Touch x coordinate
    pub x: i32,
    /// Touch y coordinate
    pub y: i32,
}

/// Result of processing one touch event.
///
/// A touch outside every hotspot is a normal outcome, not an error; most
/// taps on a touch UI land on empty space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TouchOutcome {
    /// The touch landed on a hotspot (whether or not a handler ran)
    Activated(Activation),
    /// The touch landed outside every hotspot
    NoMatch,
}

impl TouchOutcome {
    /// The activation, if the touch matched a hotspot.
    #[must_use]
    pub const fn activation(&self) -> Option<&Activation> {
        match self {
            Self::Activated(activation) => Some(activation),
            Self::NoMatch => None,
        }
    }
}

/// An activation handler registered by the application layer.
///
/// Handlers run synchronously within `handle_touch` and may navigate or set
/// values re-entrantly through the [`EngineCtx`].
pub type Handler = Box<dyn FnMut(&mut EngineCtx<'_>, &Activation)>;

#[derive(Default)]
struct HandlerTable {
    hotspot: HashMap<String, Handler>,
    group: HashMap<String, Handler>,
}

/// The mutable engine state an activation handler may act on.
///
/// Exposes navigation and value updates without exposing the handler table,
/// so a running handler can never unregister or invoke other handlers.
pub struct EngineCtx<'a> {
    resources: &'a ResourceSet,
    navigator: &'a mut ScreenNavigator,
    values: &'a mut ValueStore,
    sink: &'a mut dyn RenderSink,
}

impl EngineCtx<'_> {
    /// The immutable resource set.
    #[must_use]
    pub fn resources(&self) -> &ResourceSet {
        self.resources
    }

    /// The currently active screen.
    #[must_use]
    pub fn active_screen(&self) -> &Screen {
        self.resources.screen(self.navigator.active())
    }

    /// Transitions to the named screen.
    pub fn navigate_to(&mut self, name: &str) -> Result<(), EngineError> {
        self.navigator
            .navigate_to(self.resources, name, self.sink)
            .map(|_| ())
    }

    /// Sets a value binding, refreshing every bound area.
    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values
            .set(self.resources, name, value.into(), self.sink);
    }

    /// Binds an area to a value name.
    pub fn bind_area(&mut self, area_id: impl Into<String>, value_name: impl Into<String>) {
        self.values.bind_area(area_id, value_name);
    }

    /// Reads a value binding.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

/// Orchestrates the resource set, hit-test indexes, navigator, and value
/// store behind a single entry point.
///
/// The engine is single-threaded and never blocks: touch handling, value
/// updates, and navigation are synchronous in-memory operations. Register
/// handlers after construction, call [`Engine::start`] once to raise the
/// initial redraw, then feed it touch events in arrival order.
pub struct Engine {
    resources: ResourceSet,
    indexes: Vec<HotspotIndex>,
    navigator: ScreenNavigator,
    values: ValueStore,
    handlers: HandlerTable,
    sink: Box<dyn RenderSink>,
}

impl Engine {
    /// Builds an engine over a parsed resource set.
    ///
    /// Validates the set against the configured overlap policy and resolves
    /// the start screen; per-screen hit-test indexes are built once here.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Configuration`] if validation fails or the
    /// start screen is unset or unknown.
    pub fn new(
        resources: ResourceSet,
        config: &EngineConfig,
        sink: Box<dyn RenderSink>,
    ) -> Result<Self, EngineError> {
        let report = validate(&resources, config.overlap);
        for warning in &report.warnings {
            warn!(%warning, "manifest warning");
        }
        if !report.is_valid() {
            return Err(EngineError::from_report(&report));
        }

        let indexes: Vec<HotspotIndex> =
            resources.screens.iter().map(HotspotIndex::build).collect();
        let navigator = ScreenNavigator::new(&resources, &config.start_screen)?;
        let values = ValueStore::new(&resources.values);

        Ok(Self {
            resources,
            indexes,
            navigator,
            values,
            handlers: HandlerTable::default(),
            sink,
        })
    }

    /// Registers an activation handler for a hotspot id.
    ///
    /// Per-hotspot handlers take precedence over the hotspot's group
    /// handler. Registering again for the same id replaces the handler.
    pub fn on_hotspot(
        &mut self,
        id: impl Into<String>,
        handler: impl FnMut(&mut EngineCtx<'_>, &Activation) + 'static,
    ) {
        self.handlers.hotspot.insert(id.into(), Box::new(handler));
    }

    /// Registers a fallback handler for every hotspot carrying a group tag.
    pub fn on_group(
        &mut self,
        name: impl Into<String>,
        handler: impl FnMut(&mut EngineCtx<'_>, &Activation) + 'static,
    ) {
        self.handlers.group.insert(name.into(), Box::new(handler));
    }

    /// Raises the initial "screen entered" notification for the start
    /// screen. Call once, after handler registration.
    pub fn start(&mut self) {
        self.navigator
            .enter_initial(&self.resources, self.sink.as_mut());
    }

    /// Processes one touch event against the active screen.
    ///
    /// Resolves the coordinate through the active screen's hit-test index
    /// and invokes at most one handler: the hotspot's own if registered,
    /// otherwise its group's. The handler runs synchronously before this
    /// method returns. A touch that matches nothing is a silent no-op.
    pub fn handle_touch(&mut self, x: i32, y: i32) -> TouchOutcome {
        let screen_id = self.navigator.active();
        let screen = self.resources.screen(screen_id);

        let Some(idx) = self.indexes[screen_id.0].hit(x, y) else {
            debug!(screen = %screen.name, x, y, "touch outside all hotspots");
            return TouchOutcome::NoMatch;
        };

        let hotspot = &screen.hotspots[idx];
        let activation = Activation {
            screen: screen.name.clone(),
            hotspot: hotspot.id.clone(),
            tag: hotspot.tag.clone(),
            x,
            y,
        };
        debug!(
            screen = %activation.screen,
            hotspot = %activation.hotspot,
            x,
            y,
            "hotspot activated"
        );

        let handler = match self.handlers.hotspot.get_mut(&activation.hotspot) {
            Some(handler) => Some(handler),
            None if !activation.tag.is_empty() => self.handlers.group.get_mut(&activation.tag),
            None => None,
        };

        if let Some(handler) = handler {
            let mut ctx = EngineCtx {
                resources: &self.resources,
                navigator: &mut self.navigator,
                values: &mut self.values,
                sink: self.sink.as_mut(),
            };
            handler(&mut ctx, &activation);
        } else {
            debug!(hotspot = %activation.hotspot, "no handler registered");
        }

        TouchOutcome::Activated(activation)
    }

    /// Transitions to the named screen, as an application-level call.
    pub fn navigate_to(&mut self, name: &str) -> Result<(), EngineError> {
        self.navigator
            .navigate_to(&self.resources, name, self.sink.as_mut())
            .map(|_| ())
    }

    /// Sets a value binding, refreshing every bound area.
    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values
            .set(&self.resources, name, value.into(), self.sink.as_mut());
    }

    /// Binds an area to a value name.
    pub fn bind_area(&mut self, area_id: impl Into<String>, value_name: impl Into<String>) {
        self.values.bind_area(area_id, value_name);
    }

    /// Reads a value binding.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// The currently active screen.
    #[must_use]
    pub fn active_screen(&self) -> &Screen {
        self.resources.screen(self.navigator.active())
    }

    /// The immutable resource set.
    #[must_use]
    pub fn resources(&self) -> &ResourceSet {
        &self.resources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::events::{NullSink, RecordingSink, RenderEvent};
    use crate::models::{Area, ColorDepth, Hotspot, ImageInfo, Rect, ValueDef};
    use std::cell::Cell;
    use std::rc::Rc;

    fn keypad_resources() -> ResourceSet {
        let image = ImageInfo {
            address: 0,
            size: 128_000,
            width: 200,
            height: 320,
            stride: 200,
            depth: ColorDepth::Color16bpp,
        };

        let mut up = Screen::new("KeypadUp", image);
        up.hotspots
            .push(Hotspot::new("Key_7", "Digit", Rect::new(0, 0, 59, 59)));
        up.hotspots
            .push(Hotspot::new("Key_8", "Digit", Rect::new(70, 0, 129, 59)));
        up.areas.push(Area::new("Display", 5, 275, 190, 40));

        let mut down = Screen::new("KeypadDown", ImageInfo { address: 128_000, ..image });
        down.hotspots
            .push(Hotspot::new("Key_7", "Digit", Rect::new(0, 50, 59, 109)));
        down.areas.push(Area::new("Display", 5, 5, 190, 40));

        ResourceSet::build(
            vec![up, down],
            vec![ValueDef::new("Display", Value::from(""))],
            Vec::new(),
            Some(256_000),
        )
    }

    fn engine() -> Engine {
        let config = EngineConfig::with_start_screen("KeypadUp");
        Engine::new(keypad_resources(), &config, Box::new(NullSink)).unwrap()
    }

    #[test]
    fn test_unknown_start_screen_is_fatal() {
        let config = EngineConfig::with_start_screen("Ghost");
        assert!(matches!(
            Engine::new(keypad_resources(), &config, Box::new(NullSink)),
            Err(EngineError::Configuration { .. })
        ));
    }

    #[test]
    fn test_touch_resolves_hotspot() {
        let mut engine = engine();
        let outcome = engine.handle_touch(30, 30);
        assert_eq!(outcome.activation().unwrap().hotspot, "Key_7");
    }

    #[test]
    fn test_touch_outside_is_no_match() {
        let mut engine = engine();
        assert_eq!(engine.handle_touch(250, 30), TouchOutcome::NoMatch);
        assert_eq!(engine.handle_touch(65, 30), TouchOutcome::NoMatch);
    }

    #[test]
    fn test_hotspot_handler_overrides_group() {
        let mut engine = engine();
        let group_hits = Rc::new(Cell::new(0));
        let key_hits = Rc::new(Cell::new(0));

        let hits = Rc::clone(&group_hits);
        engine.on_group("Digit", move |_, _| hits.set(hits.get() + 1));
        let hits = Rc::clone(&key_hits);
        engine.on_hotspot("Key_7", move |_, _| hits.set(hits.get() + 1));

        engine.handle_touch(30, 30); // Key_7: per-hotspot handler
        engine.handle_touch(100, 30); // Key_8: group fallback

        assert_eq!(key_hits.get(), 1);
        assert_eq!(group_hits.get(), 1);
    }

    #[test]
    fn test_handler_can_navigate_and_set() {
        let sink = RecordingSink::new();
        let events = sink.events();
        let config = EngineConfig::with_start_screen("KeypadUp");
        let mut engine = Engine::new(keypad_resources(), &config, Box::new(sink)).unwrap();
        engine.bind_area("Display", "Display");

        engine.on_group("Digit", |ctx, activation| {
            ctx.set_value("Display", activation.hotspot.trim_start_matches("Key_"));
            ctx.navigate_to("KeypadDown").unwrap();
        });

        engine.handle_touch(30, 30);

        assert_eq!(engine.active_screen().name, "KeypadDown");
        assert_eq!(engine.value("Display"), Some(&Value::from("7")));

        let events = events.borrow();
        // Two area refreshes (Display on both screens), then the transition
        assert_eq!(events.len(), 3);
        assert!(matches!(events[2], RenderEvent::ScreenEntered { ref screen } if screen == "KeypadDown"));
    }

    #[test]
    fn test_geometry_is_screen_scoped() {
        let mut engine = engine();

        // Key_7 on the up screen sits at the top
        assert_eq!(
            engine.handle_touch(30, 30).activation().unwrap().hotspot,
            "Key_7"
        );

        engine.navigate_to("KeypadDown").unwrap();

        // Same id, shifted geometry on the down screen
        assert_eq!(engine.handle_touch(30, 30), TouchOutcome::NoMatch);
        assert_eq!(
            engine.handle_touch(30, 80).activation().unwrap().hotspot,
            "Key_7"
        );
    }

    #[test]
    fn test_start_emits_screen_entered() {
        let sink = RecordingSink::new();
        let events = sink.events();
        let config = EngineConfig::with_start_screen("KeypadUp");
        let mut engine = Engine::new(keypad_resources(), &config, Box::new(sink)).unwrap();

        engine.start();

        assert_eq!(
            *events.borrow(),
            vec![RenderEvent::ScreenEntered {
                screen: "KeypadUp".to_string()
            }]
        );
    }
}
