use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::Collection;

use crate::{db::Database, errors::AppResult, models::domain::User};

/// Cumulative-XP ledger. The user's xp column is shared with other parts of
/// the platform, so all writes go through this single increment seam.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait XpLedger: Send + Sync {
    /// Atomically add `delta` XP to the user and return the resulting tier.
    async fn increment_xp(&self, user_id: &str, delta: i64) -> AppResult<i64>;
}

pub struct MongoXpLedger {
    collection: Collection<User>,
}

impl MongoXpLedger {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("users");
        Self { collection }
    }

    /// Non-atomic read-then-write of the xp column. Known race window; used
    /// only when the atomic path fails.
    async fn increment_xp_fallback(&self, user_id: &str, delta: i64) -> AppResult<i64> {
        let user = self.collection.find_one(doc! { "id": user_id }).await?;
        let current_xp = user.map(|u| u.xp).unwrap_or(0);
        let new_xp = current_xp + delta;
        let tier = tier_for_xp(new_xp);

        self.collection
            .update_one(
                doc! { "id": user_id },
                doc! { "$set": { "xp": new_xp, "tier": tier } },
            )
            .await?;

        Ok(tier)
    }
}

#[async_trait]
impl XpLedger for MongoXpLedger {
    async fn increment_xp(&self, user_id: &str, delta: i64) -> AppResult<i64> {
        let atomic = self
            .collection
            .find_one_and_update(doc! { "id": user_id }, doc! { "$inc": { "xp": delta } })
            .return_document(ReturnDocument::After)
            .await;

        match atomic {
            Ok(Some(user)) => {
                let tier = tier_for_xp(user.xp);
                if tier != user.tier {
                    self.collection
                        .update_one(doc! { "id": user_id }, doc! { "$set": { "tier": tier } })
                        .await?;
                }
                Ok(tier)
            }
            Ok(None) => {
                log::warn!("XP increment for unknown user {}", user_id);
                Ok(0)
            }
            Err(err) => {
                log::warn!(
                    "Atomic XP increment failed for user {}, using non-atomic fallback: {}",
                    user_id,
                    err
                );
                self.increment_xp_fallback(user_id, delta).await
            }
        }
    }
}

/// Tier bucketing stands in for the platform-wide tier function. Kept private
/// to the ledger so a shared implementation can replace it.
fn tier_for_xp(xp: i64) -> i64 {
    match xp {
        i64::MIN..=499 => 0,
        500..=1999 => 1,
        2000..=4999 => 2,
        5000..=9999 => 3,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_thresholds() {
        assert_eq!(tier_for_xp(0), 0);
        assert_eq!(tier_for_xp(499), 0);
        assert_eq!(tier_for_xp(500), 1);
        assert_eq!(tier_for_xp(1999), 1);
        assert_eq!(tier_for_xp(2000), 2);
        assert_eq!(tier_for_xp(5000), 3);
        assert_eq!(tier_for_xp(10000), 4);
    }
}
