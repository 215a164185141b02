use std::collections::HashSet;

use crate::model::TagSequence;

/// `[BREAK]`-style structural markers. These may repeat on purpose.
pub fn is_directive(tag: &str) -> bool {
    let tag = tag.trim();
    tag.starts_with('[') && tag.ends_with(']')
}

/// Drop repeated tags, ignoring case. The first occurrence wins, so tags
/// placed by earlier nodes keep their position.
pub fn dedupe(tags: &TagSequence) -> TagSequence {
    let mut seen = HashSet::new();
    let mut kept = TagSequence::new();
    for tag in tags.iter() {
        if is_directive(tag) || seen.insert(tag.to_lowercase()) {
            kept.push(tag);
        }
    }
    kept
}
