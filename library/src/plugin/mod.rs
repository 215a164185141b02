//! Node evaluators the host can instantiate, keyed by type id.

pub mod evaluator;
pub mod nodes;
pub mod traits;

pub use evaluator::NodeEvaluatorRegistry;
pub use nodes::{ChainNode, PreviewNode, SimpleNode};
pub use traits::NodeEvaluator;
