use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::Attempt};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    async fn find_by_user_and_challenge(
        &self,
        user_id: &str,
        challenge_id: &str,
    ) -> AppResult<Option<Attempt>>;
    /// Upsert on the (user_id, challenge_id) unique key.
    async fn upsert(&self, attempt: Attempt) -> AppResult<Attempt>;
}

pub struct MongoAttemptRepository {
    collection: Collection<Attempt>,
}

impl MongoAttemptRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("attempts");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for attempts collection");

        let user_challenge_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "challenge_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_challenge_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(user_challenge_index).await?;

        log::info!("Successfully created indexes for attempts collection");
        Ok(())
    }
}

#[async_trait]
impl AttemptRepository for MongoAttemptRepository {
    async fn find_by_user_and_challenge(
        &self,
        user_id: &str,
        challenge_id: &str,
    ) -> AppResult<Option<Attempt>> {
        let attempt = self
            .collection
            .find_one(doc! { "user_id": user_id, "challenge_id": challenge_id })
            .await?;
        Ok(attempt)
    }

    async fn upsert(&self, attempt: Attempt) -> AppResult<Attempt> {
        let filter = doc! {
            "user_id": &attempt.user_id,
            "challenge_id": &attempt.challenge_id,
        };
        let update = doc! { "$set": to_bson(&attempt)? };

        self.collection
            .update_one(filter, update)
            .upsert(true)
            .await?;

        Ok(attempt)
    }
}
