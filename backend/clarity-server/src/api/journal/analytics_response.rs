use clarity_core::{AnalyticsReport, EmotionGroup};

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total_entries: usize,
    pub avg_intensity: f64,
    pub most_common_emotion: String,
    pub emotion_counts: BTreeMap<String, u32>,
    pub entries: Vec<EmotionGroupDto>,
}

/// One (emotion, day) bucket
#[derive(Debug, Serialize)]
pub struct EmotionGroupDto {
    pub emotion: String,
    pub intensity: Option<i32>,
    pub date: DateTime<Utc>,
    pub count: u32,
}

impl From<EmotionGroup> for EmotionGroupDto {
    fn from(group: EmotionGroup) -> Self {
        Self {
            emotion: group.emotion,
            intensity: group.intensity,
            date: group.date,
            count: group.count,
        }
    }
}

impl From<AnalyticsReport> for AnalyticsResponse {
    fn from(report: AnalyticsReport) -> Self {
        Self {
            total_entries: report.total_entries,
            avg_intensity: report.avg_intensity,
            most_common_emotion: report.most_common_emotion,
            emotion_counts: report.emotion_counts,
            entries: report.entries.into_iter().map(EmotionGroupDto::from).collect(),
        }
    }
}
