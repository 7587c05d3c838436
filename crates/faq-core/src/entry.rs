use serde::{Deserialize, Serialize};

/// One question/answer pair. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    question: String,
    answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// True when the lowercased question contains `needle`.
    /// `needle` must already be normalized with [`crate::normalize`].
    pub fn question_contains(&self, needle: &str) -> bool {
        self.question.to_lowercase().contains(needle)
    }
}

impl<Q: Into<String>, A: Into<String>> From<(Q, A)> for FaqEntry {
    fn from((question, answer): (Q, A)) -> Self {
        Self::new(question, answer)
    }
}
