//! The touchscreen dispatch engine.
//!
//! Ties the immutable resource model to runtime behavior: hit testing,
//! screen navigation, value bindings, and handler dispatch. Everything here
//! is single-threaded, synchronous, and non-blocking; rendering and touch
//! sampling are external collaborators behind the [`RenderSink`] trait and
//! the [`Engine::handle_touch`] entry point.

pub mod dispatch;
pub mod error;
pub mod events;
pub mod index;
pub mod navigator;
pub mod values;

pub use dispatch::{Activation, Engine, EngineCtx, Handler, TouchOutcome};
pub use error::EngineError;
pub use events::{NullSink, RecordingSink, RenderEvent, RenderSink};
pub use index::HotspotIndex;
pub use navigator::ScreenNavigator;
pub use values::ValueStore;
