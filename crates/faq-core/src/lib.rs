//! FAQ lookup engine.
//!
//! Holds an ordered list of question/answer pairs and answers free text by
//! case-insensitive substring search. The first stored question that contains
//! the query wins; there is no scoring. A suggestion variant returns the
//! matching questions themselves, capped at a small limit, for autocomplete.
//!
//! Zero I/O: loading documents from disk or the network lives in `faq-store`.

pub mod constants;
pub mod document;
pub mod entry;
pub mod matcher;
pub mod store;
pub mod suggest;

pub use constants::{FALLBACK_ANSWER, SUGGESTION_LIMIT};
pub use document::{FaqDocument, parse_document, to_json};
pub use entry::FaqEntry;
pub use matcher::{find_answer, find_entry, normalize};
pub use store::FaqStore;
pub use suggest::suggest;
