use crate::UserId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,

    /// Only readable inside the auth boundary, never serialized
    #[serde(skip_serializing, default)]
    pub password_digest: String,

    pub first_name: String,
    pub last_name: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user record that has not been assigned an id yet
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_digest: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        email: String,
        password_digest: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        Self {
            email,
            password_digest,
            first_name,
            last_name,
            created_at: Utc::now(),
        }
    }
}

/// Case-fold and trim an email so lookups and uniqueness agree
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
