//! Aggregation behind the analytics report.
//!
//! Entries are grouped by `(primary emotion, calendar day)` the way a
//! `GROUP BY primary_emotion, DATE(created_at)` would, but totals and
//! averages are taken over entries rather than over groups.

use crate::{AnalyticsReport, EmotionGroup, JournalEntry};

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

/// Reported when the window holds no entries
pub const DEFAULT_EMOTION: &str = "Neutral";

/// Label for entries without a primary emotion
pub const UNKNOWN_EMOTION: &str = "Unknown";

pub fn aggregate(entries: &[JournalEntry]) -> AnalyticsReport {
    let mut sorted: Vec<&JournalEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

    let groups = group_by_emotion_and_day(&sorted);

    let mut emotion_counts: BTreeMap<String, u32> = BTreeMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for group in &groups {
        let count = emotion_counts.entry(group.emotion.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(&group.emotion);
        }
        *count += group.count;
    }

    // Strictly greater keeps the earliest label on ties
    let mut most_common: Option<(&str, u32)> = None;
    for label in first_seen {
        let count = emotion_counts.get(label).copied().unwrap_or(0);
        if most_common.is_none_or(|(_, best)| count > best) {
            most_common = Some((label, count));
        }
    }
    let most_common_emotion = most_common
        .map(|(label, _)| label.to_string())
        .unwrap_or_else(|| DEFAULT_EMOTION.to_string());

    AnalyticsReport {
        total_entries: sorted.len(),
        avg_intensity: average_intensity(&sorted),
        most_common_emotion,
        emotion_counts,
        entries: groups,
    }
}

/// Expects `entries` most recent first; the output keeps that order
fn group_by_emotion_and_day(entries: &[&JournalEntry]) -> Vec<EmotionGroup> {
    let mut groups: Vec<EmotionGroup> = Vec::new();
    let mut index: HashMap<(String, NaiveDate), usize> = HashMap::new();

    for entry in entries {
        let label = emotion_label(entry);
        let key = (label.clone(), entry.created_at.date_naive());

        match index.get(&key) {
            Some(&position) => {
                if let Some(group) = groups.get_mut(position) {
                    group.count += 1;
                }
            }
            None => {
                index.insert(key, groups.len());
                groups.push(EmotionGroup {
                    emotion: label,
                    intensity: entry.fields.intensity,
                    date: entry.created_at,
                    count: 1,
                });
            }
        }
    }

    groups
}

fn emotion_label(entry: &JournalEntry) -> String {
    entry
        .fields
        .primary_emotion
        .as_deref()
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .unwrap_or(UNKNOWN_EMOTION)
        .to_string()
}

/// Entries without an intensity are left out of both sum and count
fn average_intensity(entries: &[&JournalEntry]) -> f64 {
    let intensities: Vec<i64> = entries
        .iter()
        .filter_map(|entry| entry.fields.intensity)
        .map(i64::from)
        .collect();

    if intensities.is_empty() {
        return 0.0;
    }

    let mean = intensities.iter().sum::<i64>() as f64 / intensities.len() as f64;
    (mean * 10.0).round() / 10.0
}
