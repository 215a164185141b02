//! Wire encoding for the two-channel bundle passed between chain nodes.
//!
//! Three shapes are understood on input:
//!
//! * structured: `{"pc_bundle":1,"neg":"...","pos":"..."}` (what `encode` writes)
//! * separated: `pos` + [`LEGACY_SEPARATOR`] + `neg` (written by 0.4 pre-releases)
//! * plain: anything else, read as a positive-only bundle
//!
//! Decoding never fails.

use serde::Deserialize;
use serde_json::json;

use crate::model::Bundle;

/// Version written into the `pc_bundle` marker field.
pub const BUNDLE_VERSION: u32 = 1;

/// Separator used by the older concatenated form.
pub const LEGACY_SEPARATOR: &str = "\u{1E}neg\u{1E}";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StructuredBundle {
    #[allow(dead_code)]
    pc_bundle: u32,
    pos: String,
    neg: String,
}

/// A decoded wire string, tagged by the shape it was found in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WireValue {
    Structured(Bundle),
    Separated(Bundle),
    /// Not a bundle; the whole string is the positive channel.
    Plain(String),
}

impl WireValue {
    pub fn is_bundle(&self) -> bool {
        !matches!(self, WireValue::Plain(_))
    }

    pub fn into_bundle(self) -> Bundle {
        match self {
            WireValue::Structured(bundle) | WireValue::Separated(bundle) => bundle,
            WireValue::Plain(text) => Bundle::positive_only(text),
        }
    }
}

pub fn decode(wire: &str) -> WireValue {
    if let Some(bundle) = parse_structured(wire) {
        return WireValue::Structured(bundle);
    }
    if let Some((positive, negative)) = wire.split_once(LEGACY_SEPARATOR) {
        return WireValue::Separated(Bundle::new(positive, negative));
    }
    WireValue::Plain(wire.to_string())
}

fn parse_structured(wire: &str) -> Option<Bundle> {
    if !wire.trim_start().starts_with('{') {
        return None;
    }
    serde_json::from_str::<StructuredBundle>(wire)
        .ok()
        .map(|b| Bundle::new(b.pos, b.neg))
}

/// Encode a channel pair for the next node.
///
/// With an empty negative channel the positive text is passed through as-is,
/// so nodes that only understand plain strings keep working. Positive text
/// that would itself decode as a bundle is always wrapped.
pub fn encode(positive: &str, negative: &str) -> String {
    if negative.is_empty() && !decode(positive).is_bundle() {
        return positive.to_string();
    }
    json!({
        "pc_bundle": BUNDLE_VERSION,
        "pos": positive,
        "neg": negative,
    })
    .to_string()
}

pub fn encode_bundle(bundle: &Bundle) -> String {
    encode(&bundle.positive, &bundle.negative)
}

/// Write the older separated form. Only needed to talk to nodes that predate
/// the structured encoding.
pub fn encode_separated(positive: &str, negative: &str) -> String {
    format!("{}{}{}", positive, LEGACY_SEPARATOR, negative)
}
