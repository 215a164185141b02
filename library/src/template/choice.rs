use rand::Rng;

/// Source of uniform choices for wildcard groups and `Randomize` mode.
///
/// Every `rand::Rng` is a `ChoiceSource`. Tests use [`ScriptedChoices`] to
/// make outcomes reproducible.
pub trait ChoiceSource {
    /// Pick an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng> ChoiceSource for R {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.gen_range(0..len)
    }
}

/// Replays a fixed list of indices and counts how many choices were made.
///
/// Indices past the end of the option list are clamped to the last option.
/// The script wraps around when exhausted.
#[derive(Clone, Debug, Default)]
pub struct ScriptedChoices {
    script: Vec<usize>,
    cursor: usize,
    draws: usize,
}

impl ScriptedChoices {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
            draws: 0,
        }
    }

    /// Always pick `index`.
    pub fn always(index: usize) -> Self {
        Self::new(vec![index])
    }

    /// Number of choices made so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl ChoiceSource for ScriptedChoices {
    fn pick(&mut self, len: usize) -> usize {
        self.draws += 1;
        let wanted = if self.script.is_empty() {
            0
        } else {
            let index = self.script[self.cursor % self.script.len()];
            self.cursor += 1;
            index
        };
        wanted.min(len.saturating_sub(1))
    }
}
