use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-only journal row. At most one exists per (user, question); the
/// unique compound index is the idempotency boundary.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    pub id: String,
    pub user_id: String,
    pub question_id: String,
    pub challenge_id: String,
    pub selected_option_id: String,
    pub is_correct: bool,
    pub xp_earned: i64,
    pub answered_at: DateTime<Utc>,
}

impl Answer {
    pub fn new(
        user_id: &str,
        question_id: &str,
        challenge_id: &str,
        selected_option_id: &str,
        is_correct: bool,
        xp_earned: i64,
    ) -> Self {
        Answer {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            question_id: question_id.to_string(),
            challenge_id: challenge_id.to_string(),
            selected_option_id: selected_option_id.to_string(),
            is_correct,
            xp_earned,
            answered_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_answer_carries_denormalized_challenge_id() {
        let answer = Answer::new("user-1", "q-1", "ch-1", "opt-a", true, 100);

        assert_eq!(answer.challenge_id, "ch-1");
        assert!(answer.is_correct);
        assert_eq!(answer.xp_earned, 100);
        assert!(!answer.id.is_empty());
    }

    #[test]
    fn incorrect_answer_still_recorded_with_zero_xp() {
        let answer = Answer::new("user-1", "q-1", "ch-1", "opt-b", false, 0);

        assert!(!answer.is_correct);
        assert_eq!(answer.xp_earned, 0);
    }
}
