use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::user::{User, UserRole};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user id)
    pub email: String,
    pub role: UserRole,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn new(user: &User, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let user = User::new("u-42", "John Doe", "john@example.com", UserRole::Member);
        let claims = Claims::new(&user, 24);

        assert_eq!(claims.sub, "u-42");
        assert_eq!(claims.email, "john@example.com");
        assert_eq!(claims.role, UserRole::Member);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn leader_role_is_preserved_in_claims() {
        let user = User::new("u-7", "Team Lead", "lead@example.com", UserRole::Leader);
        let claims = Claims::new(&user, 1);

        assert_eq!(claims.role, UserRole::Leader);
    }
}
