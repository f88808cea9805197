use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    /// week (default), month or all
    pub period: Option<String>,
}
