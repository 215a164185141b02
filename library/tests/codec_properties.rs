use prompt_chain::codec::{LEGACY_SEPARATOR, WireValue, decode, encode};
use prompt_chain::model::{Bundle, TagSequence};
use prompt_chain::pipeline::dedupe;

use proptest::prelude::*;

#[test]
fn test_legacy_plain_decode() {
    assert_eq!(decode("red, blue").into_bundle(), Bundle::new("red, blue", ""));
}

#[test]
fn test_round_trip_edge_cases() {
    let cases = [
        ("", ""),
        ("", "neg"),
        ("a, [BREAK], b", ""),
        ("a, b", "c, [d]"),
        ("{\"pc_bundle\":1,\"pos\":\"x\",\"neg\":\"y\"}", ""),
        ("  {", "}"),
        ("x\u{1E}neg\u{1E}y", ""),
        ("quote \" and \\ backslash", "line\nbreak"),
    ];
    for (pos, neg) in cases {
        let wire = encode(pos, neg);
        assert_eq!(decode(&wire).into_bundle(), Bundle::new(pos, neg), "wire: {}", wire);
    }
}

proptest! {
    #[test]
    fn bundle_round_trip(pos in ".*", neg in ".*") {
        let wire = encode(&pos, &neg);
        prop_assert_eq!(decode(&wire).into_bundle(), Bundle::new(pos, neg));
    }

    /// Anything without a JSON object or the separator is a positive-only value.
    #[test]
    fn plain_strings_decode_as_positive(text in "[^{\u{1E}]*") {
        prop_assert_eq!(decode(&text), WireValue::Plain(text.clone()));
        prop_assert_eq!(encode(&text, ""), text);
    }

    #[test]
    fn dedupe_is_idempotent(tags in prop::collection::vec("(\\[?[a-cA-C ]{0,3}\\]?)", 0..24)) {
        let seq = TagSequence::from(tags);
        let once = dedupe(&seq);
        prop_assert_eq!(dedupe(&once), once);
    }

    #[test]
    fn dedupe_keeps_first_of_each(tags in prop::collection::vec("[a-cA-C]{1,2}", 0..24)) {
        let seq = TagSequence::from(tags);
        let out = dedupe(&seq);
        let lowered: Vec<String> = out.iter().map(str::to_lowercase).collect();
        let mut unique = lowered.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), lowered.len());
        prop_assert_eq!(out.get(0), seq.get(0));
    }
}

#[test]
fn test_separator_constant_is_not_printable_text() {
    assert!(LEGACY_SEPARATOR.chars().any(|c| c.is_control()));
}
