//! Tag lists for notes.
//!
//! A [`TagSet`] is an ordered collection of unique, non-blank labels. Order is
//! insertion order: `add` appends, `remove` never reorders what remains.
//!
//! ## Rules
//!
//! - Tags are trimmed on `add`; a tag that is blank after trimming is ignored
//! - Uniqueness is case-sensitive: `Work` and `work` are different tags
//! - `remove` takes the tag exactly as stored (no trimming, no case folding)

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

/// Why a stored tag list is not a valid [`TagSet`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagListError {
    #[error("tag at position {0} is blank")]
    Blank(usize),

    #[error("tag '{0}' appears more than once")]
    Duplicate(String),
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set by `add`ing each tag in turn, so blanks and repeats drop out.
    pub fn from_loose<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut set = Self::new();
        for tag in tags {
            set.add(tag.as_ref());
        }
        set
    }

    /// Accepts a stored list only if it already satisfies the set rules.
    pub fn from_strict(tags: Vec<String>) -> Result<Self, TagListError> {
        for (i, tag) in tags.iter().enumerate() {
            if tag.trim().is_empty() {
                return Err(TagListError::Blank(i));
            }
            if tags[..i].contains(tag) {
                return Err(TagListError::Duplicate(tag.clone()));
            }
        }
        Ok(Self(tags))
    }

    /// Adds a tag at the end. Returns `false` when nothing changed.
    pub fn add(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    /// Removes the first exact match. Returns `false` when nothing changed.
    pub fn remove(&mut self, tag: &str) -> bool {
        match self.0.iter().position(|t| t == tag) {
            Some(pos) => {
                self.0.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_same_tag_twice_keeps_one() {
        let mut tags = TagSet::new();
        assert!(tags.add("work"));
        assert!(!tags.add("work"));
        assert_eq!(tags.as_slice(), ["work"]);
    }

    #[test]
    fn blank_tags_are_ignored() {
        let mut tags = TagSet::new();
        assert!(!tags.add("  "));
        assert!(!tags.add(""));
        assert!(tags.is_empty());
    }

    #[test]
    fn add_trims_before_checking_presence() {
        let mut tags = TagSet::new();
        tags.add("work");
        assert!(!tags.add("  work "));
        assert!(tags.add(" home "));
        assert_eq!(tags.as_slice(), ["work", "home"]);
    }

    #[test]
    fn uniqueness_is_case_sensitive() {
        let mut tags = TagSet::new();
        tags.add("Work");
        assert!(tags.add("work"));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut tags = TagSet::from_loose(["a", "b", "c"]);
        assert!(tags.remove("b"));
        assert_eq!(tags.as_slice(), ["a", "c"]);
        assert!(!tags.remove("b"));
        assert!(!tags.remove(" a"));
    }

    #[test]
    fn from_strict_rejects_blank_and_duplicate_entries() {
        assert_eq!(
            TagSet::from_strict(vec!["ok".into(), " ".into()]),
            Err(TagListError::Blank(1))
        );
        assert_eq!(
            TagSet::from_strict(vec!["x".into(), "y".into(), "x".into()]),
            Err(TagListError::Duplicate("x".into()))
        );
        assert!(TagSet::from_strict(vec!["x".into(), "X".into()]).is_ok());
    }

    #[test]
    fn serializes_as_a_plain_array() {
        let tags = TagSet::from_loose(["work", "ideas"]);
        assert_eq!(serde_json::to_string(&tags).unwrap(), r#"["work","ideas"]"#);
    }
}
