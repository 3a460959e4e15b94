use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoAnswerRepository, MongoAttemptRepository, MongoChallengeRepository,
        MongoQuestionRepository,
    },
    services::{AnswerService, ChallengeService, MongoNotifier, MongoXpLedger},
};

#[derive(Clone)]
pub struct AppState {
    pub answer_service: Arc<AnswerService>,
    pub challenge_service: Arc<ChallengeService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let challenge_repository = Arc::new(MongoChallengeRepository::new(&db));
        challenge_repository.ensure_indexes().await?;
        let question_repository = Arc::new(MongoQuestionRepository::new(&db));
        question_repository.ensure_indexes().await?;
        let answer_repository = Arc::new(MongoAnswerRepository::new(&db));
        answer_repository.ensure_indexes().await?;
        let attempt_repository = Arc::new(MongoAttemptRepository::new(&db));
        attempt_repository.ensure_indexes().await?;

        let xp_ledger = Arc::new(MongoXpLedger::new(&db));
        let notifier = Arc::new(MongoNotifier::new(&db));

        let answer_service = Arc::new(AnswerService::new(
            challenge_repository.clone(),
            question_repository.clone(),
            answer_repository.clone(),
            attempt_repository.clone(),
            xp_ledger,
            notifier,
            config.block_leader_xp,
        ));
        let challenge_service = Arc::new(ChallengeService::new(
            challenge_repository,
            question_repository,
            attempt_repository,
            answer_repository,
        ));

        Ok(Self {
            answer_service,
            challenge_service,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
