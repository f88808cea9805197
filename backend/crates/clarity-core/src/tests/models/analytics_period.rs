use crate::AnalyticsPeriod;

use std::str::FromStr;

use chrono::{Duration, TimeZone, Utc};

#[test]
fn test_analytics_period_from_str() {
    assert_eq!(AnalyticsPeriod::from_str("week").unwrap(), AnalyticsPeriod::Week);
    assert_eq!(AnalyticsPeriod::from_str("Month").unwrap(), AnalyticsPeriod::Month);
    assert_eq!(AnalyticsPeriod::from_str("all").unwrap(), AnalyticsPeriod::All);
    assert!(AnalyticsPeriod::from_str("year").is_err());
}

#[test]
fn test_analytics_period_default_is_week() {
    assert_eq!(AnalyticsPeriod::default(), AnalyticsPeriod::Week);
}

#[test]
fn test_analytics_period_window_start() {
    let now = Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0).unwrap();

    assert_eq!(
        AnalyticsPeriod::Week.window_start(now),
        Some(now - Duration::days(7))
    );
    assert_eq!(
        AnalyticsPeriod::Month.window_start(now),
        Some(now - Duration::days(30))
    );
    assert_eq!(AnalyticsPeriod::All.window_start(now), None);
}
