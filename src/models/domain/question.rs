use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published question. Immutable once live; options are embedded since they
/// never exist apart from their question.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub challenge_id: String,
    /// 0-based position in the challenge sequence. Drives the ladder reward
    /// table; irrelevant to standard scoring.
    pub order_index: i64,
    /// Base reward for standard challenges, and the ladder fallback when
    /// order_index is outside the reward table.
    pub xp_value: i64,
    pub options: Vec<AnswerOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerOption {
    pub id: String,
    /// Exactly one option per question is correct; enforced by content
    /// authoring, not here.
    pub is_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn correct_option_id(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.is_correct)
            .map(|o| o.id.as_str())
    }
}
