//! In-memory implementations of the persistence and side-effect seams,
//! shared by the integration suites.

#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use questline_server::{
    errors::{AppError, AppResult},
    models::domain::{
        question::AnswerOption, Answer, Attempt, Challenge, Notification, Question,
    },
    repositories::{AnswerRepository, AttemptRepository, ChallengeRepository, QuestionRepository},
    services::{AnswerService, Notifier, XpLedger},
};

pub struct InMemoryChallengeRepository {
    pub challenges: RwLock<HashMap<String, Challenge>>,
}

#[async_trait]
impl ChallengeRepository for InMemoryChallengeRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Challenge>> {
        Ok(self.challenges.read().await.get(id).cloned())
    }
}

pub struct InMemoryQuestionRepository {
    pub questions: RwLock<HashMap<String, Question>>,
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        Ok(self.questions.read().await.get(id).cloned())
    }

    async fn list_by_challenge(&self, challenge_id: &str) -> AppResult<Vec<Question>> {
        let mut questions: Vec<_> = self
            .questions
            .read()
            .await
            .values()
            .filter(|q| q.challenge_id == challenge_id)
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.order_index);
        Ok(questions)
    }
}

pub struct InMemoryAnswerRepository {
    pub answers: RwLock<Vec<Answer>>,
}

#[async_trait]
impl AnswerRepository for InMemoryAnswerRepository {
    async fn exists(&self, user_id: &str, question_id: &str) -> AppResult<bool> {
        Ok(self
            .answers
            .read()
            .await
            .iter()
            .any(|a| a.user_id == user_id && a.question_id == question_id))
    }

    async fn insert(&self, answer: Answer) -> AppResult<Answer> {
        let mut answers = self.answers.write().await;
        // Mirror the unique (user_id, question_id) index.
        if answers
            .iter()
            .any(|a| a.user_id == answer.user_id && a.question_id == answer.question_id)
        {
            return Err(AppError::DatabaseError(
                "E11000 duplicate key error collection: answers".to_string(),
            ));
        }
        answers.push(answer.clone());
        Ok(answer)
    }

    async fn list_by_user_and_challenge(
        &self,
        user_id: &str,
        challenge_id: &str,
    ) -> AppResult<Vec<Answer>> {
        Ok(self
            .answers
            .read()
            .await
            .iter()
            .filter(|a| a.user_id == user_id && a.challenge_id == challenge_id)
            .cloned()
            .collect())
    }

    async fn count_by_user_and_challenge(
        &self,
        user_id: &str,
        challenge_id: &str,
    ) -> AppResult<i64> {
        Ok(self
            .list_by_user_and_challenge(user_id, challenge_id)
            .await?
            .len() as i64)
    }
}

pub struct InMemoryAttemptRepository {
    pub attempts: RwLock<HashMap<(String, String), Attempt>>,
}

#[async_trait]
impl AttemptRepository for InMemoryAttemptRepository {
    async fn find_by_user_and_challenge(
        &self,
        user_id: &str,
        challenge_id: &str,
    ) -> AppResult<Option<Attempt>> {
        Ok(self
            .attempts
            .read()
            .await
            .get(&(user_id.to_string(), challenge_id.to_string()))
            .cloned())
    }

    async fn upsert(&self, attempt: Attempt) -> AppResult<Attempt> {
        self.attempts.write().await.insert(
            (attempt.user_id.clone(), attempt.challenge_id.clone()),
            attempt.clone(),
        );
        Ok(attempt)
    }
}

/// Records every increment; can be switched to fail to exercise the
/// best-effort XP path.
pub struct RecordingXpLedger {
    pub balances: RwLock<HashMap<String, i64>>,
    pub fail: bool,
}

#[async_trait]
impl XpLedger for RecordingXpLedger {
    async fn increment_xp(&self, user_id: &str, delta: i64) -> AppResult<i64> {
        if self.fail {
            return Err(AppError::DatabaseError("ledger unavailable".to_string()));
        }
        let mut balances = self.balances.write().await;
        *balances.entry(user_id.to_string()).or_insert(0) += delta;
        Ok(0)
    }
}

pub struct RecordingNotifier {
    pub sent: RwLock<Vec<Notification>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn create_notification(&self, notification: Notification) -> AppResult<()> {
        self.sent.write().await.push(notification);
        Ok(())
    }
}

/// Everything a scenario needs: the wired service plus handles on the fakes.
pub struct World {
    pub challenges: Arc<InMemoryChallengeRepository>,
    pub questions: Arc<InMemoryQuestionRepository>,
    pub answers: Arc<InMemoryAnswerRepository>,
    pub attempts: Arc<InMemoryAttemptRepository>,
    pub ledger: Arc<RecordingXpLedger>,
    pub notifier: Arc<RecordingNotifier>,
}

impl World {
    pub fn new(challenge: Challenge, questions: Vec<Question>, ledger_fails: bool) -> Self {
        World {
            challenges: Arc::new(InMemoryChallengeRepository {
                challenges: RwLock::new(HashMap::from([(challenge.id.clone(), challenge)])),
            }),
            questions: Arc::new(InMemoryQuestionRepository {
                questions: RwLock::new(
                    questions.into_iter().map(|q| (q.id.clone(), q)).collect(),
                ),
            }),
            answers: Arc::new(InMemoryAnswerRepository {
                answers: RwLock::new(Vec::new()),
            }),
            attempts: Arc::new(InMemoryAttemptRepository {
                attempts: RwLock::new(HashMap::new()),
            }),
            ledger: Arc::new(RecordingXpLedger {
                balances: RwLock::new(HashMap::new()),
                fail: ledger_fails,
            }),
            notifier: Arc::new(RecordingNotifier {
                sent: RwLock::new(Vec::new()),
            }),
        }
    }

    pub fn answer_service(&self, block_leader_xp: bool) -> AnswerService {
        AnswerService::new(
            self.challenges.clone(),
            self.questions.clone(),
            self.answers.clone(),
            self.attempts.clone(),
            self.ledger.clone(),
            self.notifier.clone(),
            block_leader_xp,
        )
    }
}

pub fn question(id: &str, challenge_id: &str, order_index: i64, xp_value: i64) -> Question {
    Question {
        id: id.to_string(),
        challenge_id: challenge_id.to_string(),
        order_index,
        xp_value,
        options: vec![
            AnswerOption {
                id: format!("{}-wrong", id),
                is_correct: false,
                explanation: Some("Incorrect".to_string()),
            },
            AnswerOption {
                id: format!("{}-right", id),
                is_correct: true,
                explanation: Some("Correct".to_string()),
            },
        ],
        created_at: None,
    }
}

pub fn standard_world(xp_values: &[i64]) -> World {
    let challenge = Challenge {
        id: "ch-std".to_string(),
        title: "Compliance Quarterly".to_string(),
        question_count: xp_values.len() as i64,
        created_at: None,
    };
    let questions = xp_values
        .iter()
        .enumerate()
        .map(|(i, &xp)| question(&format!("q{}", i + 1), "ch-std", i as i64, xp))
        .collect();
    World::new(challenge, questions, false)
}

pub fn ladder_world(question_count: usize) -> World {
    let challenge = Challenge {
        id: "ch-lad".to_string(),
        title: "Million Dollar Quiz".to_string(),
        question_count: question_count as i64,
        created_at: None,
    };
    let questions = (0..question_count)
        .map(|i| question(&format!("L{}", i), "ch-lad", i as i64, 1))
        .collect();
    World::new(challenge, questions, false)
}
