use crate::constants::FALLBACK_ANSWER;
use crate::entry::FaqEntry;
use crate::store::FaqStore;

/// Normalize user text for matching. Lowercase only; no trimming, no
/// punctuation stripping.
pub fn normalize(query: &str) -> String {
    query.to_lowercase()
}

/// First entry, in store order, whose question contains `query`
/// case-insensitively. The empty query matches the first entry.
pub fn find_entry<'a>(query: &str, store: &'a FaqStore) -> Option<&'a FaqEntry> {
    let needle = normalize(query);
    store.iter().find(|entry| entry.question_contains(&needle))
}

/// Answer for `query`, or [`FALLBACK_ANSWER`] when nothing matches.
///
/// First match wins. A later entry that matches "better" is never considered.
pub fn find_answer<'a>(query: &str, store: &'a FaqStore) -> &'a str {
    find_entry(query, store).map_or(FALLBACK_ANSWER, FaqEntry::answer)
}
