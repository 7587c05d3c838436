use faq_core::{FALLBACK_ANSWER, FaqEntry, FaqStore};

/// Load progress of a FAQ document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Pending,
    Ready(FaqStore),
    Failed(String),
}

/// A store that may not be available yet.
///
/// Lookups never block and never fail: until the document is ready every
/// question gets [`FALLBACK_ANSWER`] and suggestions are empty. The caller
/// sees the same thing it would for an unmatched question; the operator
/// sees a warning in the log.
#[derive(Debug, Clone, Default)]
pub struct FaqHandle {
    state: LoadState,
}

impl FaqHandle {
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn ready(store: FaqStore) -> Self {
        Self {
            state: LoadState::Ready(store),
        }
    }

    pub fn set_ready(&mut self, store: FaqStore) {
        self.state = LoadState::Ready(store);
    }

    pub fn set_failed(&mut self, reason: impl Into<String>) {
        self.state = LoadState::Failed(reason.into());
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }

    pub fn store(&self) -> Option<&FaqStore> {
        match &self.state {
            LoadState::Ready(store) => Some(store),
            _ => None,
        }
    }

    /// Entry count, 0 while pending or failed.
    pub fn len(&self) -> usize {
        self.store().map_or(0, FaqStore::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn status(&self) -> &'static str {
        match self.state {
            LoadState::Pending => "pending",
            LoadState::Ready(_) => "ready",
            LoadState::Failed(_) => "failed",
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Matched entry, `None` on no match or while the store is unavailable.
    pub fn find_entry(&self, query: &str) -> Option<&FaqEntry> {
        match self.store() {
            Some(store) => {
                let entry = store.find_entry(query);
                tracing::debug!(query, matched = entry.is_some(), "faq lookup");
                entry
            }
            None => {
                self.warn_unavailable("lookup");
                None
            }
        }
    }

    pub fn find_answer(&self, query: &str) -> &str {
        self.find_entry(query).map_or(FALLBACK_ANSWER, FaqEntry::answer)
    }

    pub fn suggest(&self, partial: &str, limit: usize) -> Vec<&str> {
        match self.store() {
            Some(store) => store.suggest(partial, limit),
            None => {
                self.warn_unavailable("suggest");
                Vec::new()
            }
        }
    }

    fn warn_unavailable(&self, op: &str) {
        match &self.state {
            LoadState::Failed(reason) => {
                tracing::warn!("{op} against a FAQ that failed to load: {reason}")
            }
            _ => tracing::warn!("{op} before the FAQ document finished loading"),
        }
    }
}
