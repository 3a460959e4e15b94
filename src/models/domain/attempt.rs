use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row per (user, challenge). Created lazily on the first answer; score
/// and max_score are only written at the terminal transition.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Attempt {
    pub user_id: String,
    pub challenge_id: String,
    pub started_at: DateTime<Utc>,
    /// Non-null means the attempt is terminal and absorbs all further
    /// submissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    pub score: i64,
    pub max_score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_reason: Option<EndedReason>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EndedReason {
    Completed,
    Wrong,
}

impl Attempt {
    pub fn started(user_id: &str, challenge_id: &str) -> Self {
        Attempt {
            user_id: user_id.to_string(),
            challenge_id: challenge_id.to_string(),
            started_at: Utc::now(),
            submitted_at: None,
            score: 0,
            max_score: 0,
            ended_reason: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.submitted_at.is_some()
    }

    pub fn finalize(&mut self, reason: EndedReason, total_xp: i64, max_score: i64) {
        self.submitted_at = Some(Utc::now());
        self.score = total_xp;
        self.max_score = max_score;
        self.ended_reason = Some(reason);
    }
}
