//! Adapter between the host graph's call convention and the chain core.
//!
//! The host passes node widgets as named fields and upstream links as
//! dynamic `input_1`, `input_2`, ... slots. [`NodeRequest`] captures that
//! shape; [`NodeRequest::into_parts`] turns it into core inputs.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{LibraryError, Result};
use crate::evaluation::{ChainInputs, NodeOutput};
use crate::model::{CombineMode, NodeState};

/// Prefix of the dynamic upstream slots.
pub const INPUT_PREFIX: &str = "input_";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct NodeRequest {
    pub mode: String,
    pub text: String,
    pub neg_text: String,
    pub switch_index: i64,
    pub locked: bool,
    pub cached_output: String,
    pub cached_neg_output: String,
    pub disabled: bool,
    /// Every other field, including the `input_N` slots.
    #[serde(flatten)]
    pub slots: Map<String, Value>,
}

impl Default for NodeRequest {
    fn default() -> Self {
        Self {
            mode: CombineMode::default().to_string(),
            text: String::new(),
            neg_text: String::new(),
            switch_index: 1,
            locked: false,
            cached_output: String::new(),
            cached_neg_output: String::new(),
            disabled: false,
            slots: Map::new(),
        }
    }
}

impl NodeRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set `input_{slot}`.
    pub fn with_input(mut self, slot: usize, value: &str) -> Self {
        self.slots
            .insert(format!("{}{}", INPUT_PREFIX, slot), Value::String(value.to_string()));
        self
    }

    pub fn into_parts(self) -> Result<(NodeState, ChainInputs)> {
        let mode: CombineMode = self.mode.parse()?;
        let upstream = collect_dynamic_inputs(&self.slots)?;
        // Zero and negative indices select nothing.
        let switch_index = usize::try_from(self.switch_index).unwrap_or(0);

        let state = NodeState {
            mode,
            switch_index,
            locked: self.locked,
            cached_output: self.cached_output,
            cached_neg_output: self.cached_neg_output,
            disabled: self.disabled,
        };
        let inputs = ChainInputs {
            text: self.text,
            neg_text: self.neg_text,
            upstream,
        };
        Ok((state, inputs))
    }
}

/// Collect `input_1, input_2, ...` up to the first missing slot.
///
/// `null` marks a present but unconnected slot and is skipped. Slots after a
/// gap are ignored.
pub fn collect_dynamic_inputs(slots: &Map<String, Value>) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for slot in 1usize.. {
        let key = format!("{}{}", INPUT_PREFIX, slot);
        match slots.get(&key) {
            None => break,
            Some(Value::Null) => {}
            Some(Value::String(value)) => inputs.push(value.clone()),
            Some(other) => {
                return Err(LibraryError::InvalidArgument(format!(
                    "{} must be a string, got {}",
                    key, other
                )));
            }
        }
    }
    debug!("Collected {} upstream inputs", inputs.len());
    Ok(inputs)
}

/// What the host receives back.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeResponse {
    /// Encoded bundle for chaining into the next node.
    pub output: String,
    pub positive: String,
    pub negative: String,
    pub display: String,
}

impl From<NodeOutput> for NodeResponse {
    fn from(output: NodeOutput) -> Self {
        Self {
            output: output.bundle,
            positive: output.positive,
            negative: output.negative,
            display: output.display,
        }
    }
}
