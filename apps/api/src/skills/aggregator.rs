//! Skill aggregation: merges multi-selected, manually typed, and
//! resume-extracted skills into a single `SkillSet`.
//!
//! Deduplication is exact-string: `"Python"` and `"python"` are two members.
//! Only the matcher folds case, at comparison time.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::skills::split_skills;

/// Duplicate-free (by exact string) set of skill tokens for one request.
/// Blank tokens are never members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    /// Unions the three skill sources.
    ///
    /// `manual_text` is split on commas here. `extracted` must already be
    /// tokenized by the caller (see `split_skills`).
    pub fn combine<S, E>(selected: &[S], manual_text: &str, extracted: &[E]) -> Self
    where
        S: AsRef<str>,
        E: AsRef<str>,
    {
        let mut set = SkillSet::default();
        for skill in selected {
            set.insert(skill.as_ref());
        }
        for skill in split_skills(manual_text) {
            set.insert(&skill);
        }
        for skill in extracted {
            set.insert(skill.as_ref());
        }
        set
    }

    fn insert(&mut self, token: &str) {
        let token = token.trim();
        if !token.is_empty() {
            self.0.insert(token.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Members joined with `", "`, as sent to the career-suggestion prompt.
    pub fn joined(&self) -> String {
        self.0.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
