
use crate::AppState;

use clarity_auth::TokenService;

use std::path::Path;

pub(crate) const TEST_SECRET: &[u8] = b"unit-test-secret-that-is-long-enough";

/// State over a fresh in-memory database with uploads under `uploads_dir`
pub(crate) async fn create_test_state(uploads_dir: &Path) -> AppState {
    let pool = clarity_db::database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let tokens = TokenService::with_hs256(TEST_SECRET, chrono::Duration::days(7))
        .expect("Failed to create token service");

    AppState::new(
        pool,
        tokens,
        uploads_dir.to_path_buf(),
        1024 * 1024,
        vec!["http://localhost:3000".to_string()],
    )
}
