use crate::entry::FaqEntry;
use crate::matcher::normalize;
use crate::store::FaqStore;

/// Questions containing `partial` (case-insensitive), in store order, at most
/// `limit` of them.
///
/// An empty `partial` yields nothing: suggestions are suppressed until the
/// user has typed something.
pub fn suggest<'a>(partial: &str, store: &'a FaqStore, limit: usize) -> Vec<&'a str> {
    if partial.is_empty() {
        return Vec::new();
    }
    let needle = normalize(partial);
    store
        .iter()
        .filter(|entry| entry.question_contains(&needle))
        .map(FaqEntry::question)
        .take(limit)
        .collect()
}
