/// Reply returned when no stored question contains the query.
pub const FALLBACK_ANSWER: &str = "I don't have an answer for that question.";

/// Maximum number of questions offered as autocomplete suggestions.
pub const SUGGESTION_LIMIT: usize = 3;
