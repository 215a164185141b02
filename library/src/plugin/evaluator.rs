//! Node evaluator registry.

use std::collections::HashMap;
use std::sync::Arc;

use log::warn;

use super::nodes::{ChainNode, PreviewNode, SimpleNode};
use super::traits::NodeEvaluator;
use crate::error::{LibraryError, Result};
use crate::host::{NodeRequest, NodeResponse};
use crate::template::ChoiceSource;

#[derive(Clone, Default)]
pub struct NodeEvaluatorRegistry {
    evaluators: HashMap<&'static str, Arc<dyn NodeEvaluator>>,
}

impl NodeEvaluatorRegistry {
    pub fn new() -> Self {
        Self {
            evaluators: HashMap::new(),
        }
    }

    /// Registry with the chain, simple and preview nodes.
    pub fn with_builtin_nodes() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(ChainNode::new()));
        registry.register(Arc::new(SimpleNode));
        registry.register(Arc::new(PreviewNode));
        registry
    }

    pub fn register(&mut self, evaluator: Arc<dyn NodeEvaluator>) {
        self.evaluators.insert(evaluator.type_id(), evaluator);
    }

    pub fn get(&self, type_id: &str) -> Option<&Arc<dyn NodeEvaluator>> {
        self.evaluators.get(type_id)
    }

    /// Registered type ids, sorted.
    pub fn type_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.evaluators.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn evaluate(
        &self,
        type_id: &str,
        request: NodeRequest,
        rng: &mut dyn ChoiceSource,
    ) -> Result<NodeResponse> {
        match self.evaluators.get(type_id) {
            Some(evaluator) => evaluator.evaluate(request, rng),
            None => {
                warn!("Unknown node type '{}'", type_id);
                Err(LibraryError::UnknownNodeType(type_id.to_string()))
            }
        }
    }
}
