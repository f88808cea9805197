use crate::{
    AnalyticsPeriod, AnalyticsReport, EntryWindow, JournalRepository, Result as CoreErrorResult,
    UserId, analytics,
};

use std::sync::Arc;

use chrono::{DateTime, Utc};

/// Read-only reports over a user's journal
#[derive(Clone)]
pub struct AnalyticsEngine {
    entries: Arc<dyn JournalRepository>,
}

impl AnalyticsEngine {
    pub fn new(entries: Arc<dyn JournalRepository>) -> Self {
        Self { entries }
    }

    pub async fn compute_analytics(
        &self,
        user_id: UserId,
        period: AnalyticsPeriod,
    ) -> CoreErrorResult<AnalyticsReport> {
        self.compute_analytics_at(user_id, period, Utc::now()).await
    }

    /// Same as `compute_analytics` with an explicit "now"
    pub async fn compute_analytics_at(
        &self,
        user_id: UserId,
        period: AnalyticsPeriod,
        now: DateTime<Utc>,
    ) -> CoreErrorResult<AnalyticsReport> {
        let window = period
            .window_start(now)
            .map(EntryWindow::since)
            .unwrap_or_default();

        let entries = self.entries.find_for_user(user_id, window).await?;

        Ok(analytics::aggregate(&entries))
    }
}
