//! Owner-scoped persistence of journal entries.

use crate::{
    CoreError, EntryFields, EntryId, EntryWindow, JournalEntry, JournalEntryDraft,
    JournalRepository, MonthFilter, Result as CoreErrorResult, UserId,
};

use std::sync::Arc;

use log::info;

const ENTRY_NOT_FOUND: &str = "Journal entry not found";

#[derive(Clone)]
pub struct JournalStore {
    entries: Arc<dyn JournalRepository>,
}

impl JournalStore {
    pub fn new(entries: Arc<dyn JournalRepository>) -> Self {
        Self { entries }
    }

    /// Every call creates a new entry; there is no deduplication
    pub async fn create_entry(
        &self,
        user_id: UserId,
        fields: EntryFields,
        photo_ref: Option<String>,
    ) -> CoreErrorResult<JournalEntry> {
        fields.validate()?;

        let draft = JournalEntryDraft::new(user_id, fields, photo_ref);
        let entry = self.entries.insert(draft).await?;

        info!("Created journal entry {} for user {}", entry.id, user_id);

        Ok(entry)
    }

    /// Most recent first, optionally narrowed to one calendar month
    pub async fn list_entries(
        &self,
        user_id: UserId,
        month: Option<MonthFilter>,
    ) -> CoreErrorResult<Vec<JournalEntry>> {
        let window = month
            .map(|m| EntryWindow::between(m.start(), m.end()))
            .unwrap_or_default();

        Ok(self.entries.find_for_user(user_id, window).await?)
    }

    /// Another user's entry is reported exactly like a missing one
    pub async fn get_entry(&self, id: EntryId, user_id: UserId) -> CoreErrorResult<JournalEntry> {
        self.entries
            .find_by_id_for_user(id, user_id)
            .await?
            .ok_or_else(|| CoreError::not_found(ENTRY_NOT_FOUND))
    }

    pub async fn delete_entry(&self, id: EntryId, user_id: UserId) -> CoreErrorResult<()> {
        let removed = self.entries.delete_for_user(id, user_id).await?;
        if removed == 0 {
            return Err(CoreError::not_found(ENTRY_NOT_FOUND));
        }

        info!("Deleted journal entry {} for user {}", id, user_id);

        Ok(())
    }
}
