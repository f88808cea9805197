use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub total_entries: usize,
    /// Mean intensity rounded to one decimal place
    pub avg_intensity: f64,
    pub most_common_emotion: String,
    pub emotion_counts: BTreeMap<String, u32>,
    /// One row per (emotion, calendar day), most recent first
    pub entries: Vec<EmotionGroup>,
}

/// Entries sharing a primary emotion on the same calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionGroup {
    pub emotion: String,
    /// Intensity of the group's most recent entry
    pub intensity: Option<i32>,
    /// `created_at` of the group's most recent entry
    pub date: DateTime<Utc>,
    pub count: u32,
}
