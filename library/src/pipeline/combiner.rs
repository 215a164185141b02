//! Mode combiner: merges a node's own tags with its upstream sequences.

use crate::model::{CombineMode, TagSequence};
use crate::template::ChoiceSource;

/// Merge `local` with `inputs` according to `mode`.
///
/// `switch_index` is 1-based and only read in [`CombineMode::Switch`].
/// `Randomize` draws one choice when `inputs` is non-empty; the other modes
/// are deterministic.
pub fn combine<C: ChoiceSource + ?Sized>(
    mode: CombineMode,
    local: &TagSequence,
    inputs: &[TagSequence],
    switch_index: usize,
    rng: &mut C,
) -> TagSequence {
    match mode {
        CombineMode::Switch => switch(local, inputs, switch_index),
        CombineMode::Randomize => randomize(local, inputs, rng),
        CombineMode::Combine => {
            let sequences: Vec<&TagSequence> = std::iter::once(local)
                .chain(inputs.iter())
                .filter(|seq| !seq.is_empty())
                .collect();
            interleave(&sequences)
        }
    }
}

fn switch(local: &TagSequence, inputs: &[TagSequence], switch_index: usize) -> TagSequence {
    let mut merged = local.clone();
    let selected = switch_index
        .checked_sub(1)
        .and_then(|index| inputs.get(index))
        .filter(|seq| !seq.is_empty());
    if let Some(selected) = selected {
        merged.extend_from(selected);
    }
    merged
}

fn randomize<C: ChoiceSource + ?Sized>(
    local: &TagSequence,
    inputs: &[TagSequence],
    rng: &mut C,
) -> TagSequence {
    let mut merged = local.clone();
    if inputs.is_empty() {
        return merged;
    }
    if let Some(selected) = inputs.get(rng.pick(inputs.len())) {
        merged.extend_from(selected);
    }
    merged
}

/// Round-robin merge: position 0 of every sequence, then position 1, ...
pub fn interleave(sequences: &[&TagSequence]) -> TagSequence {
    let longest = sequences.iter().map(|seq| seq.len()).max().unwrap_or(0);
    let mut merged = TagSequence::new();
    for position in 0..longest {
        for seq in sequences {
            if let Some(tag) = seq.get(position) {
                merged.push(tag);
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::ScriptedChoices;

    fn tags(text: &str) -> TagSequence {
        TagSequence::parse(text)
    }

    #[test]
    fn test_combine_interleaves_local_first() {
        let mut rng = ScriptedChoices::always(0);
        let merged = combine(
            CombineMode::Combine,
            &tags("a,b"),
            &[tags("c,d,e"), tags("f")],
            1,
            &mut rng,
        );
        assert_eq!(merged.join(), "a, c, f, b, d, e");
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_combine_skips_empty_sources() {
        let mut rng = ScriptedChoices::always(0);
        let merged = combine(
            CombineMode::Combine,
            &TagSequence::new(),
            &[tags("x"), TagSequence::new(), tags("y,z")],
            1,
            &mut rng,
        );
        assert_eq!(merged.join(), "x, y, z");
    }

    #[test]
    fn test_combine_nothing() {
        let mut rng = ScriptedChoices::always(0);
        let merged = combine(CombineMode::Combine, &TagSequence::new(), &[], 1, &mut rng);
        assert!(merged.is_empty());
    }

    #[test]
    fn test_switch_selects_one_based() {
        let inputs = [tags("x"), tags("y"), tags("z")];
        let mut rng = ScriptedChoices::always(0);
        let merged = combine(CombineMode::Switch, &TagSequence::new(), &inputs, 2, &mut rng);
        assert_eq!(merged.join(), "y");

        let merged = combine(CombineMode::Switch, &tags("local"), &inputs, 3, &mut rng);
        assert_eq!(merged.join(), "local, z");
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_switch_out_of_range_keeps_local() {
        let inputs = [tags("x"), tags("y"), tags("z")];
        let mut rng = ScriptedChoices::always(0);
        for index in [0, 4, 5, usize::MAX] {
            let merged = combine(CombineMode::Switch, &tags("local"), &inputs, index, &mut rng);
            assert_eq!(merged.join(), "local");
        }
    }

    #[test]
    fn test_randomize_appends_chosen_input() {
        let inputs = [tags("x"), tags("y, w"), tags("z")];
        let mut rng = ScriptedChoices::always(1);
        let merged = combine(CombineMode::Randomize, &tags("a"), &inputs, 1, &mut rng);
        assert_eq!(merged.join(), "a, y, w");
        assert_eq!(rng.draws(), 1);

        let merged = combine(CombineMode::Randomize, &TagSequence::new(), &inputs, 1, &mut rng);
        assert_eq!(merged.join(), "y, w");
    }

    #[test]
    fn test_randomize_without_inputs_draws_nothing() {
        let mut rng = ScriptedChoices::always(0);
        let merged = combine(CombineMode::Randomize, &tags("a, b"), &[], 1, &mut rng);
        assert_eq!(merged.join(), "a, b");
        assert_eq!(rng.draws(), 0);
    }
}
