//! Evaluation core for PromptChain nodes.
//!
//! A chain node resolves its own wildcard template, merges the result with
//! the tag lists of its upstream nodes and hands a two-channel bundle
//! (positive, negative) to the next node.

pub mod codec;
pub mod error;
pub mod evaluation;
pub mod host;
pub mod model;
pub mod pipeline;
pub mod plugin;
pub mod template;

pub use codec::{WireValue, decode, encode};
pub use error::{LibraryError, Result};
pub use evaluation::{ChainController, ChainInputs, EvalEvent, EvalObserver, NodeOutput};
pub use host::{NodeRequest, NodeResponse};
pub use model::{Bundle, Channel, CombineMode, NodeState, TagSequence};
pub use pipeline::{combine, dedupe};
pub use plugin::{NodeEvaluator, NodeEvaluatorRegistry};
pub use template::{ChoiceSource, ScriptedChoices, resolve};
