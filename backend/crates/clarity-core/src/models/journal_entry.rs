use crate::{EntryFields, EntryId, UserId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,
    pub user_id: UserId,
    pub photo_ref: Option<String>,

    #[serde(flatten)]
    pub fields: EntryFields,

    pub created_at: DateTime<Utc>,
}

/// An entry on its way into storage, before an id is assigned
#[derive(Debug, Clone)]
pub struct JournalEntryDraft {
    pub user_id: UserId,
    pub photo_ref: Option<String>,
    pub fields: EntryFields,
    pub created_at: DateTime<Utc>,
}

impl JournalEntryDraft {
    pub fn new(user_id: UserId, fields: EntryFields, photo_ref: Option<String>) -> Self {
        Self {
            user_id,
            photo_ref,
            fields,
            created_at: Utc::now(),
        }
    }

    pub fn into_entry(self, id: EntryId) -> JournalEntry {
        JournalEntry {
            id,
            user_id: self.user_id,
            photo_ref: self.photo_ref,
            fields: self.fields,
            created_at: self.created_at,
        }
    }
}
