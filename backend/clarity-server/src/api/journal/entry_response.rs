use crate::EntryDto;

use serde::Serialize;

/// Single entry response
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub entry: EntryDto,
}
