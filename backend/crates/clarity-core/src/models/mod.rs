pub mod analysis_payload;
pub mod analytics_period;
pub mod analytics_report;
pub mod entry_fields;
pub mod entry_id;
pub mod journal_entry;
pub mod month_filter;
pub mod structured_fields;
pub mod user;
pub mod user_id;
