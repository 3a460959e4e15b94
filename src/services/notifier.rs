use async_trait::async_trait;
use mongodb::Collection;

use crate::{db::Database, errors::AppResult, models::domain::Notification};

/// Fire-and-forget user messages. Callers must never let a delivery failure
/// bubble into their own response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn create_notification(&self, notification: Notification) -> AppResult<()>;
}

pub struct MongoNotifier {
    collection: Collection<Notification>,
}

impl MongoNotifier {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("notifications");
        Self { collection }
    }
}

#[async_trait]
impl Notifier for MongoNotifier {
    async fn create_notification(&self, notification: Notification) -> AppResult<()> {
        self.collection.insert_one(&notification).await?;
        Ok(())
    }
}
