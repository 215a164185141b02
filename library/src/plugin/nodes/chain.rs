use crate::error::Result;
use crate::evaluation::ChainController;
use crate::host::{NodeRequest, NodeResponse};
use crate::plugin::NodeEvaluator;
use crate::template::ChoiceSource;

/// The full chain node: template, negative template, dynamic inputs,
/// mode, switch, lock and disable.
#[derive(Clone, Default)]
pub struct ChainNode {
    controller: ChainController,
}

impl ChainNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_controller(controller: ChainController) -> Self {
        Self { controller }
    }
}

impl NodeEvaluator for ChainNode {
    fn type_id(&self) -> &'static str {
        "prompt_chain"
    }

    fn display_name(&self) -> String {
        "PromptChain".to_string()
    }

    fn evaluate(&self, request: NodeRequest, rng: &mut dyn ChoiceSource) -> Result<NodeResponse> {
        let (state, inputs) = request.into_parts()?;
        Ok(self.controller.evaluate(state, &inputs, rng).into())
    }
}
