use std::collections::HashSet;

use crate::entry::FaqEntry;
use crate::{matcher, suggest};

/// Ordered collection of FAQ entries. Source order is preserved and
/// duplicate questions are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqStore {
    entries: Vec<FaqEntry>,
}

impl FaqStore {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    pub fn from_pairs<I, Q, A>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Q, A)>,
        Q: Into<String>,
        A: Into<String>,
    {
        pairs.into_iter().map(FaqEntry::from).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&FaqEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FaqEntry> {
        self.entries.iter()
    }

    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(FaqEntry::question)
    }

    /// Number of entries whose question text (compared case-insensitively)
    /// already appeared earlier in the store. Those entries can never be
    /// returned by [`FaqStore::find_answer`] for their own question.
    pub fn duplicate_questions(&self) -> usize {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter(|e| !seen.insert(e.question().to_lowercase()))
            .count()
    }

    /// See [`matcher::find_answer`].
    pub fn find_answer(&self, query: &str) -> &str {
        matcher::find_answer(query, self)
    }

    /// See [`matcher::find_entry`].
    pub fn find_entry(&self, query: &str) -> Option<&FaqEntry> {
        matcher::find_entry(query, self)
    }

    /// See [`suggest::suggest`].
    pub fn suggest(&self, partial: &str, limit: usize) -> Vec<&str> {
        suggest::suggest(partial, self, limit)
    }
}

impl FromIterator<FaqEntry> for FaqStore {
    fn from_iter<T: IntoIterator<Item = FaqEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<FaqEntry>> for FaqStore {
    fn from(entries: Vec<FaqEntry>) -> Self {
        Self::new(entries)
    }
}

impl<'a> IntoIterator for &'a FaqStore {
    type Item = &'a FaqEntry;
    type IntoIter = std::slice::Iter<'a, FaqEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
