use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered list of trimmed, non-empty tags.
///
/// Order matters: earlier tags come from earlier nodes in the chain and win
/// during deduplication.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSequence(Vec<String>);

impl TagSequence {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Split comma-separated text into tags, dropping empty entries.
    pub fn parse(text: &str) -> Self {
        text.split(',').collect()
    }

    /// Append a tag. Blank tags are ignored.
    pub fn push(&mut self, tag: &str) {
        let tag = tag.trim();
        if !tag.is_empty() {
            self.0.push(tag.to_string());
        }
    }

    pub fn extend_from(&mut self, other: &TagSequence) {
        self.0.extend(other.0.iter().cloned());
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Render as `"a, b, c"`.
    pub fn join(&self) -> String {
        self.0.join(", ")
    }
}

impl fmt::Display for TagSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join())
    }
}

impl<'a> FromIterator<&'a str> for TagSequence {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tags = TagSequence::new();
        for tag in iter {
            tags.push(tag);
        }
        tags
    }
}

impl From<Vec<String>> for TagSequence {
    fn from(tags: Vec<String>) -> Self {
        tags.iter().map(String::as_str).collect()
    }
}

impl From<TagSequence> for Vec<String> {
    fn from(tags: TagSequence) -> Self {
        tags.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_drops_empty() {
        let tags = TagSequence::parse(" red ,, blue ,  , [BREAK]");
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["red", "blue", "[BREAK]"]);
        assert_eq!(tags.join(), "red, blue, [BREAK]");
    }

    #[test]
    fn test_parse_empty() {
        assert!(TagSequence::parse("").is_empty());
        assert!(TagSequence::parse(" , ,").is_empty());
    }

    #[test]
    fn test_from_vec_keeps_invariant() {
        let tags = TagSequence::from(vec!["  a ".to_string(), "".to_string(), "b".to_string()]);
        assert_eq!(tags.to_string(), "a, b");
    }
}
