use crate::models::user::normalize_email;
use crate::{User, UserId};

use chrono::Utc;

#[test]
fn test_normalize_email() {
    assert_eq!(normalize_email("  Ada@Example.COM "), "ada@example.com");
}

#[test]
fn test_user_serialization_omits_password_digest() {
    let user = User {
        id: UserId(7),
        email: "ada@example.com".to_string(),
        password_digest: "$argon2id$secret".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    let encoded = serde_json::to_string(&user).unwrap();

    assert!(!encoded.contains("password_digest"));
    assert!(!encoded.contains("argon2"));
    assert!(encoded.contains("\"id\":7"));
}
