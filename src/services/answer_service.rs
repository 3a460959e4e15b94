use std::sync::Arc;

use serde_json::json;
use validator::Validate;

use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::{Answer, Attempt, Challenge, ChallengeVariant, EndedReason, Notification, UserRole},
    models::dto::request::SubmitAnswerRequest,
    repositories::{AnswerRepository, AttemptRepository, ChallengeRepository, QuestionRepository},
    services::notifier::Notifier,
    services::scoring::{apply_leader_gate, score_answer},
    services::xp_ledger::XpLedger,
};

/// Result of one answer submission, before wire shaping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub xp_earned: i64,
    pub explanation: Option<String>,
    /// Only revealed on an incorrect answer.
    pub correct_option_id: Option<String>,
    pub ended_reason: Option<EndedReason>,
    /// Sum over the whole journal; only set when this call finalized the attempt.
    pub total_xp_earned: Option<i64>,
    pub xp_blocked_for_leader: bool,
}

pub struct AnswerService {
    challenges: Arc<dyn ChallengeRepository>,
    questions: Arc<dyn QuestionRepository>,
    answers: Arc<dyn AnswerRepository>,
    attempts: Arc<dyn AttemptRepository>,
    xp_ledger: Arc<dyn XpLedger>,
    notifier: Arc<dyn Notifier>,
    block_leader_xp: bool,
}

impl AnswerService {
    pub fn new(
        challenges: Arc<dyn ChallengeRepository>,
        questions: Arc<dyn QuestionRepository>,
        answers: Arc<dyn AnswerRepository>,
        attempts: Arc<dyn AttemptRepository>,
        xp_ledger: Arc<dyn XpLedger>,
        notifier: Arc<dyn Notifier>,
        block_leader_xp: bool,
    ) -> Self {
        Self {
            challenges,
            questions,
            answers,
            attempts,
            xp_ledger,
            notifier,
            block_leader_xp,
        }
    }

    /// The whole submit path: gates, scoring, journal insert, XP commit,
    /// terminal transition, notification. The journal insert either commits
    /// or the call fails; everything after it is best-effort.
    pub async fn submit_answer(
        &self,
        claims: &Claims,
        request: SubmitAnswerRequest,
    ) -> AppResult<AnswerOutcome> {
        request.validate().map_err(|_| {
            AppError::BadRequest("Missing question_id or option_id".to_string())
        })?;

        let user_id = claims.sub.as_str();

        // Resolve the option -> question -> challenge chain.
        let question = self
            .questions
            .find_by_id(&request.question_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Invalid question or option".to_string()))?;
        let option = question
            .option(&request.option_id)
            .ok_or_else(|| AppError::BadRequest("Invalid question or option".to_string()))?
            .clone();
        let challenge = self
            .challenges
            .find_by_id(&question.challenge_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Invalid question or option".to_string()))?;

        // Terminal attempts absorb every later submission.
        let attempt = self
            .attempts
            .find_by_user_and_challenge(user_id, &challenge.id)
            .await?;
        if attempt.as_ref().is_some_and(|a| a.is_terminal()) {
            return Err(AppError::StateConflict(
                "This attempt has already been finalized".to_string(),
            ));
        }

        // Fast-path duplicate check. Not race-proof on its own; the unique
        // (user_id, question_id) index backs it up at commit time.
        if self.answers.exists(user_id, &question.id).await? {
            return Err(AppError::StateConflict(
                "You have already answered this question".to_string(),
            ));
        }

        let variant = challenge.variant();
        let score = score_answer(&question, &option, variant);
        let is_leader = claims.role == UserRole::Leader;
        let (xp_earned, xp_blocked_for_leader) =
            apply_leader_gate(score.xp_earned, self.block_leader_xp, is_leader);

        let answer = Answer::new(
            user_id,
            &question.id,
            &challenge.id,
            &option.id,
            score.is_correct,
            xp_earned,
        );
        self.answers
            .insert(answer)
            .await
            .map_err(map_duplicate_answer)?;

        if xp_earned > 0 {
            // XP commit is best-effort; the answer is already journaled.
            if let Err(err) = self.xp_ledger.increment_xp(user_id, xp_earned).await {
                log::warn!("XP commit failed for user {}: {}", user_id, err);
            }
        }

        let ended_reason = self
            .termination(user_id, &challenge, variant, score.is_correct)
            .await?;

        let total_xp_earned = match ended_reason {
            Some(reason) => Some(self.finalize_attempt(user_id, &challenge, attempt, reason).await?),
            None => {
                if attempt.is_none() {
                    // First answer for this challenge: the attempt row starts here.
                    self.attempts
                        .upsert(Attempt::started(user_id, &challenge.id))
                        .await?;
                }
                None
            }
        };

        Ok(AnswerOutcome {
            is_correct: score.is_correct,
            xp_earned,
            explanation: option.explanation.clone(),
            correct_option_id: if score.is_correct {
                None
            } else {
                question.correct_option_id().map(str::to_string)
            },
            ended_reason,
            total_xp_earned,
            xp_blocked_for_leader,
        })
    }

    async fn termination(
        &self,
        user_id: &str,
        challenge: &Challenge,
        variant: ChallengeVariant,
        is_correct: bool,
    ) -> AppResult<Option<EndedReason>> {
        if variant == ChallengeVariant::Ladder && !is_correct {
            return Ok(Some(EndedReason::Wrong));
        }

        let answered = self
            .answers
            .count_by_user_and_challenge(user_id, &challenge.id)
            .await?;
        if answered >= challenge.question_count {
            return Ok(Some(EndedReason::Completed));
        }

        Ok(None)
    }

    /// Terminal transition: lock in the journal total on the attempt row and
    /// tell the user. Notification delivery is fire-and-forget.
    async fn finalize_attempt(
        &self,
        user_id: &str,
        challenge: &Challenge,
        attempt: Option<Attempt>,
        reason: EndedReason,
    ) -> AppResult<i64> {
        let journal = self
            .answers
            .list_by_user_and_challenge(user_id, &challenge.id)
            .await?;
        let total_xp: i64 = journal.iter().map(|a| a.xp_earned).sum();
        let levels_cleared = journal.iter().filter(|a| a.is_correct).count();

        let mut attempt = attempt.unwrap_or_else(|| Attempt::started(user_id, &challenge.id));
        attempt.finalize(reason, total_xp, challenge.question_count);
        self.attempts.upsert(attempt).await?;

        let notification = match reason {
            EndedReason::Completed => Notification::new(
                user_id,
                "challenge_completed",
                "Challenge complete!",
                &format!(
                    "You finished \"{}\" and earned {} XP.",
                    challenge.title, total_xp
                ),
                Some(json!({ "challenge_id": challenge.id, "total_xp": total_xp })),
            ),
            EndedReason::Wrong => Notification::new(
                user_id,
                "challenge_ended",
                "Challenge over",
                &format!(
                    "\"{}\" ended at level {}. You keep the {} XP earned so far.",
                    challenge.title, levels_cleared, total_xp
                ),
                Some(json!({
                    "challenge_id": challenge.id,
                    "total_xp": total_xp,
                    "level_reached": levels_cleared,
                })),
            ),
        };
        if let Err(err) = self.notifier.create_notification(notification).await {
            log::warn!("Notification dispatch failed for user {}: {}", user_id, err);
        }

        Ok(total_xp)
    }
}

/// The unique (user_id, question_id) index turns a lost duplicate race into a
/// key violation; report it the same way the fast-path gate would have.
fn map_duplicate_answer(err: AppError) -> AppError {
    match err {
        AppError::DatabaseError(msg) if msg.contains("E11000") => AppError::StateConflict(
            "You have already answered this question".to_string(),
        ),
        other => other,
    }
}
