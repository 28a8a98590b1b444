//! Value binding store: named mutable values and the areas showing them.

use super::events::RenderSink;
use crate::models::{ResourceSet, Value, ValueDef, ValueKind};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Holds current values under symbolic names and schedules area refreshes
/// when they change.
///
/// Declared defaults are preloaded at construction, so reading a declared
/// name before the application ever sets it yields its default. The store
/// never renders anything; it only raises refresh notifications through the
/// [`RenderSink`].
///
/// Area bindings are kept in a `BTreeMap` so refresh notifications fire in a
/// deterministic order.
///
/// The store is the only mutable runtime structure and is not synchronized;
/// if a second thread delivers value updates, wrap the engine in a mutex or
/// funnel updates through a channel onto the dispatch thread.
#[derive(Debug)]
pub struct ValueStore {
    values: HashMap<String, Value>,
    declared: HashMap<String, ValueKind>,
    bindings: BTreeMap<String, String>,
}

impl ValueStore {
    /// Creates a store preloaded with the manifest's declared defaults.
    #[must_use]
    pub fn new(defs: &[ValueDef]) -> Self {
        let mut values = HashMap::new();
        let mut declared = HashMap::new();
        for def in defs {
            values.insert(def.name.clone(), def.default.clone());
            declared.insert(def.name.clone(), def.default.kind());
        }
        Self {
            values,
            declared,
            bindings: BTreeMap::new(),
        }
    }

    /// Reads the current value of a binding.
    ///
    /// Declared names always resolve (to their default until set); names
    /// that were never declared and never set yield `None`, which renders as
    /// empty.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Associates an area id with a binding name. Idempotent; rebinding an
    /// area replaces its previous binding.
    pub fn bind_area(&mut self, area_id: impl Into<String>, value_name: impl Into<String>) {
        let area_id = area_id.into();
        let value_name = value_name.into();
        debug!(area = %area_id, value = %value_name, "area bound");
        self.bindings.insert(area_id, value_name);
    }

    /// The binding name an area currently displays, if any.
    #[must_use]
    pub fn binding(&self, area_id: &str) -> Option<&str> {
        self.bindings.get(area_id).map(String::as_str)
    }

    /// Sets a value, creating the binding if it does not exist.
    ///
    /// Always succeeds. A value whose kind differs from the declared kind is
    /// stored anyway with a warning. Every area bound to the name is
    /// scheduled for refresh, one notification per bound area per call; the
    /// store does not coalesce repeated sets.
    pub fn set(
        &mut self,
        resources: &ResourceSet,
        name: impl Into<String>,
        value: Value,
        sink: &mut dyn RenderSink,
    ) {
        let name = name.into();

        if let Some(declared) = self.declared.get(&name) {
            if *declared != value.kind() {
                warn!(
                    value = %name,
                    declared = %declared,
                    got = %value.kind(),
                    "value kind differs from declaration"
                );
            }
        }

        debug!(value = %name, new = %value, "value updated");
        self.values.insert(name.clone(), value.clone());

        for (area_id, value_name) in &self.bindings {
            if *value_name != name {
                continue;
            }
            // The same area id may appear on several screens; refresh each.
            for screen in &resources.screens {
                if screen.area(area_id).is_some() {
                    sink.area_refresh(&screen.name, area_id, &value);
                }
            }
        }
    }
}
