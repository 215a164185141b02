use crate::error::Result;
use crate::host::{NodeRequest, NodeResponse};
use crate::plugin::NodeEvaluator;
use crate::template::{ChoiceSource, resolve_line_alternatives};

/// Template-only node without inputs. Lines act as alternatives until a
/// line ends with a comma.
pub struct SimpleNode;

impl NodeEvaluator for SimpleNode {
    fn type_id(&self) -> &'static str {
        "prompt_chain_simple"
    }

    fn display_name(&self) -> String {
        "PromptChain Simple".to_string()
    }

    fn evaluate(&self, request: NodeRequest, rng: &mut dyn ChoiceSource) -> Result<NodeResponse> {
        let text = resolve_line_alternatives(&request.text, rng);
        Ok(NodeResponse {
            output: text.clone(),
            positive: text.clone(),
            negative: String::new(),
            display: text,
        })
    }
}
