//! Wildcard template resolution.
//!
//! Templates are comma-separated tags where `a | b | c` picks one
//! alternative at random. When nearly every line ends with `|` the whole
//! template is one big alternative set instead.

mod choice;
mod line_alternatives;
mod resolver;

pub use choice::{ChoiceSource, ScriptedChoices};
pub use line_alternatives::resolve_line_alternatives;
pub use resolver::{is_multiline_group, resolve};
