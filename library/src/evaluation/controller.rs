//! Chain node controller.
//!
//! One call to [`ChainController::evaluate`] is one node evaluation. The
//! controller checks the disable and lock overrides first, then runs each
//! channel through resolve -> combine -> dedupe and encodes the pair for the
//! next node.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::observer::{EvalEvent, EvalObserver, LogObserver};
use crate::codec::{self, WireValue};
use crate::model::{Bundle, Channel, NodeState, TagSequence};
use crate::pipeline::{combine, dedupe};
use crate::template::{ChoiceSource, resolve};

/// Display value of a disabled node.
pub const DISABLED_DISPLAY: &str = "(disabled)";

/// Text inputs of one chain node.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ChainInputs {
    pub text: String,
    pub neg_text: String,
    /// Upstream wire strings in slot order.
    pub upstream: Vec<String>,
}

impl ChainInputs {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    pub fn with_negative(mut self, neg_text: &str) -> Self {
        self.neg_text = neg_text.to_string();
        self
    }

    pub fn with_upstream<I, S>(mut self, upstream: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.upstream = upstream.into_iter().map(Into::into).collect();
        self
    }
}

/// Result of one evaluation.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeOutput {
    /// Encoded bundle for downstream chain nodes.
    pub bundle: String,
    pub positive: String,
    pub negative: String,
    pub display: String,
}

impl NodeOutput {
    pub fn from_bundle(bundle: Bundle) -> Self {
        let display = display_text(&bundle);
        Self {
            bundle: codec::encode_bundle(&bundle),
            display,
            positive: bundle.positive,
            negative: bundle.negative,
        }
    }

    fn disabled() -> Self {
        Self {
            display: DISABLED_DISPLAY.to_string(),
            ..Self::default()
        }
    }

    pub fn channel(&self, channel: Channel) -> &str {
        match channel {
            Channel::Positive => &self.positive,
            Channel::Negative => &self.negative,
        }
    }
}

/// Human-readable form of a bundle: the positive text, plus the negative
/// text on its own line when there is one.
pub fn display_text(bundle: &Bundle) -> String {
    if bundle.negative.is_empty() {
        bundle.positive.clone()
    } else {
        format!("{}\nNegative: {}", bundle.positive, bundle.negative)
    }
}

#[derive(Clone)]
pub struct ChainController {
    observer: Arc<dyn EvalObserver>,
}

impl Default for ChainController {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainController {
    pub fn new() -> Self {
        Self::with_observer(Arc::new(LogObserver))
    }

    pub fn with_observer(observer: Arc<dyn EvalObserver>) -> Self {
        Self { observer }
    }

    pub fn evaluate<C: ChoiceSource + ?Sized>(
        &self,
        state: NodeState,
        inputs: &ChainInputs,
        rng: &mut C,
    ) -> NodeOutput {
        if state.disabled {
            self.observer.on_event(&EvalEvent::Disabled);
            return NodeOutput::disabled();
        }

        if state.locked && !state.cached_output.is_empty() {
            let bundle = match codec::decode(&state.cached_output) {
                WireValue::Plain(_) => Bundle::new(state.cached_output, state.cached_neg_output),
                decoded => decoded.into_bundle(),
            };
            let output = NodeOutput::from_bundle(bundle);
            self.observer.on_event(&EvalEvent::CacheHit {
                bundle: output.bundle.clone(),
            });
            return output;
        }

        let upstream: Vec<Bundle> = inputs
            .upstream
            .iter()
            .map(|wire| codec::decode(wire).into_bundle())
            .collect();
        let positives = channel_sequences(&upstream, Channel::Positive);
        let negatives = channel_sequences(&upstream, Channel::Negative);

        let positive = self.run_channel(Channel::Positive, &inputs.text, &positives, &state, rng);
        let negative = self.run_channel(Channel::Negative, &inputs.neg_text, &negatives, &state, rng);

        let output = NodeOutput::from_bundle(Bundle::new(positive, negative));
        self.observer.on_event(&EvalEvent::Finished {
            bundle: output.bundle.clone(),
        });
        output
    }

    fn run_channel<C: ChoiceSource + ?Sized>(
        &self,
        channel: Channel,
        template: &str,
        upstream: &[TagSequence],
        state: &NodeState,
        rng: &mut C,
    ) -> String {
        let text = resolve(template, rng);
        let local = TagSequence::parse(&text);
        self.observer.on_event(&EvalEvent::Resolved { channel, text });

        let merged = combine(state.mode, &local, upstream, state.switch_index, rng);
        let tags = dedupe(&merged);
        let joined = tags.join();
        self.observer.on_event(&EvalEvent::Combined {
            channel,
            mode: state.mode,
            tags,
        });
        joined
    }
}

/// Non-empty upstream values for one channel, in slot order.
fn channel_sequences(upstream: &[Bundle], channel: Channel) -> Vec<TagSequence> {
    upstream
        .iter()
        .map(|bundle| bundle.channel(channel).trim())
        .filter(|text| !text.is_empty())
        .map(TagSequence::parse)
        .collect()
}
