use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Challenge};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChallengeRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Challenge>>;
}

pub struct MongoChallengeRepository {
    collection: Collection<Challenge>,
}

impl MongoChallengeRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("challenges");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for challenges collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        Ok(())
    }
}

#[async_trait]
impl ChallengeRepository for MongoChallengeRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Challenge>> {
        let challenge = self.collection.find_one(doc! { "id": id }).await?;
        Ok(challenge)
    }
}
