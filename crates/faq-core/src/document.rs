use serde::{Deserialize, Serialize};

use crate::entry::FaqEntry;
use crate::store::FaqStore;

/// Wire shape of a FAQ document: `{ "questions": [ {question, answer}, ... ] }`.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqDocument {
    pub questions: Vec<FaqEntry>,
}

impl From<FaqDocument> for FaqStore {
    fn from(doc: FaqDocument) -> Self {
        FaqStore::new(doc.questions)
    }
}

impl From<&FaqStore> for FaqDocument {
    fn from(store: &FaqStore) -> Self {
        Self {
            questions: store.entries().to_vec(),
        }
    }
}

/// Parse a FAQ document into a store, keeping source order.
pub fn parse_document(json: &str) -> serde_json::Result<FaqStore> {
    let doc: FaqDocument = serde_json::from_str(json)?;
    Ok(doc.into())
}

/// Render a store back into the document shape, pretty-printed.
pub fn to_json(store: &FaqStore) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&FaqDocument::from(store))
}
