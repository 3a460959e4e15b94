use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Attempt, EndedReason, Question};
use crate::services::answer_service::AnswerOutcome;

/// Wire shape of a successful answer submission.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerResultResponse {
    pub success: bool,
    pub is_correct: bool,
    pub xp_earned: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Only revealed when the answer was incorrect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_option_id: Option<String>,
    pub is_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_reason: Option<EndedReason>,
    /// Only populated on the call that finalized the attempt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_xp_earned: Option<i64>,
    pub xp_blocked_for_leader: bool,
}

impl From<AnswerOutcome> for AnswerResultResponse {
    fn from(outcome: AnswerOutcome) -> Self {
        AnswerResultResponse {
            success: true,
            is_correct: outcome.is_correct,
            xp_earned: outcome.xp_earned,
            explanation: outcome.explanation,
            correct_option_id: outcome.correct_option_id,
            is_completed: outcome.ended_reason.is_some(),
            ended_reason: outcome.ended_reason,
            total_xp_earned: outcome.total_xp_earned,
            xp_blocked_for_leader: outcome.xp_blocked_for_leader,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AttemptStatusResponse {
    pub challenge_id: String,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    pub score: i64,
    pub max_score: i64,
    pub answered_count: i64,
    pub is_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_reason: Option<EndedReason>,
}

impl AttemptStatusResponse {
    pub fn from_attempt(attempt: Attempt, answered_count: i64) -> Self {
        AttemptStatusResponse {
            challenge_id: attempt.challenge_id.clone(),
            started_at: attempt.started_at,
            submitted_at: attempt.submitted_at,
            score: attempt.score,
            max_score: attempt.max_score,
            answered_count,
            is_completed: attempt.submitted_at.is_some(),
            ended_reason: attempt.ended_reason,
        }
    }
}

/// Question as served to quiz takers: no correctness, no explanations.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub order_index: i64,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub id: String,
}

impl From<Question> for QuestionView {
    fn from(question: Question) -> Self {
        QuestionView {
            id: question.id,
            order_index: question.order_index,
            options: question
                .options
                .into_iter()
                .map(|o| OptionView { id: o.id })
                .collect(),
        }
    }
}
