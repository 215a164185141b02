//! Core plugin traits.

use crate::error::Result;
use crate::host::{NodeRequest, NodeResponse};
use crate::template::ChoiceSource;

/// One kind of node the host can place in a graph.
pub trait NodeEvaluator: Send + Sync {
    fn type_id(&self) -> &'static str;
    fn display_name(&self) -> String;
    fn evaluate(&self, request: NodeRequest, rng: &mut dyn ChoiceSource) -> Result<NodeResponse>;
}
