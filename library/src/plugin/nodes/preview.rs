use crate::codec;
use crate::error::Result;
use crate::evaluation::controller::display_text;
use crate::host::{INPUT_PREFIX, NodeRequest, NodeResponse};
use crate::plugin::NodeEvaluator;
use crate::template::ChoiceSource;

/// Shows what an upstream node produced and forwards it unchanged.
pub struct PreviewNode;

impl NodeEvaluator for PreviewNode {
    fn type_id(&self) -> &'static str {
        "prompt_chain_preview"
    }

    fn display_name(&self) -> String {
        "PromptChain Preview".to_string()
    }

    fn evaluate(&self, request: NodeRequest, _rng: &mut dyn ChoiceSource) -> Result<NodeResponse> {
        let wire = request
            .slots
            .get(&format!("{}1", INPUT_PREFIX))
            .and_then(|value| value.as_str())
            .unwrap_or_default()
            .to_string();
        let bundle = codec::decode(&wire).into_bundle();
        Ok(NodeResponse {
            display: display_text(&bundle),
            positive: bundle.positive,
            negative: bundle.negative,
            output: wire,
        })
    }
}
