use serde::Deserialize;

/// Query parameters for listing entries.
///
/// Kept as text so a bad value reports which parameter was wrong.
#[derive(Debug, Default, Deserialize)]
pub struct ListEntriesQuery {
    /// 1-12, requires `year`
    pub month: Option<String>,
    pub year: Option<String>,
}
