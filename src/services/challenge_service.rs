use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Attempt, Challenge},
    models::dto::response::QuestionView,
    repositories::{AnswerRepository, AttemptRepository, ChallengeRepository, QuestionRepository},
};

pub struct ChallengeService {
    challenges: Arc<dyn ChallengeRepository>,
    questions: Arc<dyn QuestionRepository>,
    attempts: Arc<dyn AttemptRepository>,
    answers: Arc<dyn AnswerRepository>,
}

impl ChallengeService {
    pub fn new(
        challenges: Arc<dyn ChallengeRepository>,
        questions: Arc<dyn QuestionRepository>,
        attempts: Arc<dyn AttemptRepository>,
        answers: Arc<dyn AnswerRepository>,
    ) -> Self {
        Self {
            challenges,
            questions,
            attempts,
            answers,
        }
    }

    pub async fn get_challenge(&self, id: &str) -> AppResult<Challenge> {
        self.challenges
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Challenge with id '{}' not found", id)))
    }

    /// The challenge's questions in sequence order, with correctness and
    /// explanations stripped for the client.
    pub async fn list_questions(&self, challenge_id: &str) -> AppResult<Vec<QuestionView>> {
        // 404 for an unknown challenge rather than an empty list.
        self.get_challenge(challenge_id).await?;

        let questions = self.questions.list_by_challenge(challenge_id).await?;
        Ok(questions.into_iter().map(QuestionView::from).collect())
    }

    /// The caller's attempt plus how far the journal has progressed.
    pub async fn attempt_status(
        &self,
        user_id: &str,
        challenge_id: &str,
    ) -> AppResult<(Attempt, i64)> {
        let attempt = self
            .attempts
            .find_by_user_and_challenge(user_id, challenge_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No attempt for challenge '{}' yet",
                    challenge_id
                ))
            })?;

        let answered = self
            .answers
            .count_by_user_and_challenge(user_id, challenge_id)
            .await?;

        Ok((attempt, answered))
    }
}
