use clarity_db::database;

use clarity_core::UserId;

use chrono::Utc;
use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    database::open_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a stub user for foreign key constraints
pub async fn create_test_user(pool: &SqlitePool, email: &str) -> UserId {
    let now = Utc::now().timestamp_millis();

    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    let result = sqlx::query(
        "INSERT INTO users (email, password_digest, first_name, last_name, created_at, updated_at)
         VALUES (?, 'digest', 'Test', 'User', ?, ?)",
    )
    .bind(email)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test user");

    UserId(result.last_insert_rowid())
}
