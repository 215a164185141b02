//! Value types passed through one node evaluation.

pub mod bundle;
pub mod state;
pub mod tags;

pub use bundle::{Bundle, Channel};
pub use state::{CombineMode, NodeState};
pub use tags::TagSequence;
