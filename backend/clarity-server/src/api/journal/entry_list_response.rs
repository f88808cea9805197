use crate::EntryDto;

use serde::Serialize;

/// Entries newest first
#[derive(Debug, Serialize)]
pub struct EntryListResponse {
    pub entries: Vec<EntryDto>,
}
