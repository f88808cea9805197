use crate::tests::fakes::{InMemoryJournal, entry_with};
use crate::{AnalyticsEngine, AnalyticsPeriod, UserId};

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use googletest::prelude::*;

const OWNER: UserId = UserId(1);

#[tokio::test]
async fn given_entries_across_periods_when_computed_then_window_applies() {
    let now = Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap();
    let journal = Arc::new(InMemoryJournal::default());
    journal.seed(OWNER, entry_with(Some("joy"), Some(8)), now - Duration::days(1));
    journal.seed(OWNER, entry_with(Some("calm"), Some(4)), now - Duration::days(10));
    journal.seed(OWNER, entry_with(Some("sad"), Some(2)), now - Duration::days(90));
    journal.seed(UserId(2), entry_with(Some("joy"), Some(1)), now - Duration::days(1));
    let engine = AnalyticsEngine::new(journal);

    let week = engine
        .compute_analytics_at(OWNER, AnalyticsPeriod::Week, now)
        .await
        .unwrap();
    let month = engine
        .compute_analytics_at(OWNER, AnalyticsPeriod::Month, now)
        .await
        .unwrap();
    let all = engine
        .compute_analytics_at(OWNER, AnalyticsPeriod::All, now)
        .await
        .unwrap();

    assert_that!(week.total_entries, eq(1));
    assert_that!(week.avg_intensity, eq(8.0));
    assert_that!(month.total_entries, eq(2));
    assert_that!(month.avg_intensity, eq(6.0));
    assert_that!(all.total_entries, eq(3));
    assert_that!(all.avg_intensity, eq(4.7));
}

#[tokio::test]
async fn given_no_entries_when_computed_then_neutral_report() {
    let engine = AnalyticsEngine::new(Arc::new(InMemoryJournal::default()));

    let report = engine
        .compute_analytics(OWNER, AnalyticsPeriod::Week)
        .await
        .unwrap();

    assert_that!(report.total_entries, eq(0));
    assert_that!(report.most_common_emotion.as_str(), eq("Neutral"));
}
