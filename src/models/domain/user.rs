use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub role: UserRole,
    /// Cumulative XP across all gamification sources. Mutated only through
    /// the XP ledger, never read-modify-written by handlers directly.
    pub xp: i64,
    pub tier: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Member,
    /// Team leaders. A reserved policy flag can exclude them from XP payouts.
    Leader,
}

impl User {
    pub fn new(id: &str, display_name: &str, email: &str, role: UserRole) -> Self {
        User {
            id: id.to_string(),
            display_name: display_name.to_string(),
            email: email.to_string(),
            role,
            xp: 0,
            tier: 0,
            created_at: Some(Utc::now()),
        }
    }
}
