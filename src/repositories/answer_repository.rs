use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Answer};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Fast-path duplicate check. The unique (user_id, question_id) index is
    /// the real guarantee; this read only buys a friendlier error message.
    async fn exists(&self, user_id: &str, question_id: &str) -> AppResult<bool>;
    async fn insert(&self, answer: Answer) -> AppResult<Answer>;
    async fn list_by_user_and_challenge(
        &self,
        user_id: &str,
        challenge_id: &str,
    ) -> AppResult<Vec<Answer>>;
    async fn count_by_user_and_challenge(
        &self,
        user_id: &str,
        challenge_id: &str,
    ) -> AppResult<i64>;
}

pub struct MongoAnswerRepository {
    collection: Collection<Answer>,
}

impl MongoAnswerRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("answers");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for answers collection");

        let user_question_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "question_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_question_unique".to_string())
                    .build(),
            )
            .build();

        let user_challenge_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "challenge_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("user_challenge".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(user_question_index).await?;
        self.collection.create_index(user_challenge_index).await?;

        log::info!("Successfully created indexes for answers collection");
        Ok(())
    }
}

#[async_trait]
impl AnswerRepository for MongoAnswerRepository {
    async fn exists(&self, user_id: &str, question_id: &str) -> AppResult<bool> {
        let answer = self
            .collection
            .find_one(doc! { "user_id": user_id, "question_id": question_id })
            .await?;
        Ok(answer.is_some())
    }

    async fn insert(&self, answer: Answer) -> AppResult<Answer> {
        self.collection.insert_one(&answer).await?;
        Ok(answer)
    }

    async fn list_by_user_and_challenge(
        &self,
        user_id: &str,
        challenge_id: &str,
    ) -> AppResult<Vec<Answer>> {
        let answers = self
            .collection
            .find(doc! { "user_id": user_id, "challenge_id": challenge_id })
            .sort(doc! { "answered_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(answers)
    }

    async fn count_by_user_and_challenge(
        &self,
        user_id: &str,
        challenge_id: &str,
    ) -> AppResult<i64> {
        let count = self
            .collection
            .count_documents(doc! { "user_id": user_id, "challenge_id": challenge_id })
            .await?;
        Ok(count as i64)
    }
}
