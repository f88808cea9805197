use crate::{Result as CoreErrorResult, StructuredFields, validation};

use serde::{Deserialize, Serialize};

/// Caller-supplied content of a journal entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryFields {
    pub mood: Option<String>,
    pub notes: Option<String>,
    pub emotions: Option<Vec<String>>,
    pub primary_emotion: Option<String>,
    pub secondary_emotion: Option<String>,
    pub intensity: Option<i32>,
    pub insights: Option<Vec<String>>,
    pub tips: Option<Vec<String>>,
    pub confidence: Option<i32>,

    #[serde(flatten)]
    pub analysis: StructuredFields,
}

impl EntryFields {
    /// Range checks that must hold before anything is persisted
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if let Some(intensity) = self.intensity {
            validation::validate_intensity(intensity)?;
        }
        if let Some(confidence) = self.confidence {
            validation::validate_confidence(confidence)?;
        }
        Ok(())
    }
}
