use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LibraryError;

/// How a node merges its own tags with the tags of its upstream nodes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CombineMode {
    /// Append one upstream sequence picked at random.
    #[default]
    Randomize,
    /// Interleave every upstream sequence round-robin.
    Combine,
    /// Append the upstream sequence at `switch_index` (1-based).
    Switch,
}

impl CombineMode {
    pub const ALL: [CombineMode; 3] = [
        CombineMode::Randomize,
        CombineMode::Combine,
        CombineMode::Switch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CombineMode::Randomize => "Randomize",
            CombineMode::Combine => "Combine",
            CombineMode::Switch => "Switch",
        }
    }
}

impl fmt::Display for CombineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CombineMode {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CombineMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| LibraryError::UnknownMode(s.to_string()))
    }
}

/// Per-evaluation node configuration supplied by the host.
///
/// The core never keeps this between calls; the host owns the cache fields
/// and writes the previous output back into them when the user locks a node.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct NodeState {
    pub mode: CombineMode,
    /// 1-based index into the non-empty upstream values. Only used by `Switch`.
    pub switch_index: usize,
    pub locked: bool,
    pub cached_output: String,
    pub cached_neg_output: String,
    pub disabled: bool,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            mode: CombineMode::default(),
            switch_index: 1,
            locked: false,
            cached_output: String::new(),
            cached_neg_output: String::new(),
            disabled: false,
        }
    }
}

impl NodeState {
    pub fn new(mode: CombineMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_switch_index(mut self, index: usize) -> Self {
        self.switch_index = index;
        self
    }

    pub fn locked_with(mut self, cached_output: &str, cached_neg_output: &str) -> Self {
        self.locked = true;
        self.cached_output = cached_output.to_string();
        self.cached_neg_output = cached_neg_output.to_string();
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}
