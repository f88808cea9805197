use crate::EntryDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateEntryResponse {
    pub message: String,
    pub entry: EntryDto,
}
