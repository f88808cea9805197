use clarity_core::{JournalEntry, StructuredFields};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Journal entry as returned to clients.
///
/// Absent list fields serialize as `[]`; absent structured fields as `null`.
#[derive(Debug, Serialize)]
pub struct EntryDto {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "photoPath")]
    pub photo_path: Option<String>,
    pub mood: Option<String>,
    pub notes: Option<String>,
    pub emotions: Vec<String>,
    pub primary_emotion: Option<String>,
    pub secondary_emotion: Option<String>,
    pub intensity: Option<i32>,
    pub insights: Vec<String>,
    pub tips: Vec<String>,
    pub confidence: Option<i32>,
    #[serde(flatten)]
    pub analysis: StructuredFields,
    pub created_at: DateTime<Utc>,
}

impl From<JournalEntry> for EntryDto {
    fn from(entry: JournalEntry) -> Self {
        let fields = entry.fields;
        Self {
            id: entry.id.0,
            user_id: entry.user_id.0,
            photo_path: entry.photo_ref,
            mood: fields.mood,
            notes: fields.notes,
            emotions: fields.emotions.unwrap_or_default(),
            primary_emotion: fields.primary_emotion,
            secondary_emotion: fields.secondary_emotion,
            intensity: fields.intensity,
            insights: fields.insights.unwrap_or_default(),
            tips: fields.tips.unwrap_or_default(),
            confidence: fields.confidence,
            analysis: fields.analysis,
            created_at: entry.created_at,
        }
    }
}
