use crate::LocalPhotoStore;

use clarity_auth::{Argon2PasswordHasher, TokenService};
use clarity_core::{AnalyticsEngine, JournalStore, PhotoStore, UserStore};
use clarity_db::{SqliteJournalRepository, SqliteUserRepository};

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handler state; cheap to clone
#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
    pub journal: JournalStore,
    pub analytics: AnalyticsEngine,
    pub tokens: Arc<TokenService>,
    pub photos: Arc<dyn PhotoStore>,
    /// Served read-only under `/uploads`
    pub uploads_dir: PathBuf,
    pub max_photo_bytes: usize,
    pub cors_origins: Vec<String>,
}

impl AppState {
    /// Wire the SQLite repositories and local photo store into the services
    pub fn new(
        pool: SqlitePool,
        tokens: TokenService,
        uploads_dir: PathBuf,
        max_photo_bytes: usize,
        cors_origins: Vec<String>,
    ) -> Self {
        let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));
        let journal_repo = Arc::new(SqliteJournalRepository::new(pool));

        Self {
            users: UserStore::new(user_repo, Arc::new(Argon2PasswordHasher::new())),
            journal: JournalStore::new(journal_repo.clone()),
            analytics: AnalyticsEngine::new(journal_repo),
            tokens: Arc::new(tokens),
            photos: Arc::new(LocalPhotoStore::new(uploads_dir.clone())),
            uploads_dir,
            max_photo_bytes,
            cors_origins,
        }
    }
}
