use crate::{EntryId, JournalEntry, JournalEntryDraft, RepositoryError, UserId};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Half-open `created_at` range; open ends are unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryWindow {
    pub from: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl EntryWindow {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn since(from: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            until: None,
        }
    }

    pub fn between(from: DateTime<Utc>, until: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            until: Some(until),
        }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| at >= from) && self.until.is_none_or(|until| at < until)
    }
}

/// Every query is scoped to the owning user
#[async_trait]
pub trait JournalRepository: Send + Sync {
    async fn insert(&self, draft: JournalEntryDraft) -> Result<JournalEntry, RepositoryError>;

    /// Entries inside `window`, most recent first (ties: highest id first)
    async fn find_for_user(
        &self,
        user_id: UserId,
        window: EntryWindow,
    ) -> Result<Vec<JournalEntry>, RepositoryError>;

    async fn find_by_id_for_user(
        &self,
        id: EntryId,
        user_id: UserId,
    ) -> Result<Option<JournalEntry>, RepositoryError>;

    /// Returns the number of rows removed
    async fn delete_for_user(&self, id: EntryId, user_id: UserId) -> Result<u64, RepositoryError>;
}
