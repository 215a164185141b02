//! Chain node evaluation: override handling and the per-channel pipeline.

pub mod controller;
pub mod observer;

pub use controller::{ChainController, ChainInputs, DISABLED_DISPLAY, NodeOutput};
pub use observer::{EvalEvent, EvalObserver, LogObserver, NullObserver, RecordingObserver};
