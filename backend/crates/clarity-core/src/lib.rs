pub mod analytics;
pub mod error;
pub mod models;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::analysis_payload::AnalysisPayload;
pub use models::analytics_period::AnalyticsPeriod;
pub use models::analytics_report::{AnalyticsReport, EmotionGroup};
pub use models::entry_fields::EntryFields;
pub use models::entry_id::EntryId;
pub use models::journal_entry::{JournalEntry, JournalEntryDraft};
pub use models::month_filter::MonthFilter;
pub use models::structured_fields::StructuredFields;
pub use models::user::{NewUser, User};
pub use models::user_id::UserId;
pub use ports::journal_repository::{EntryWindow, JournalRepository};
pub use ports::password_hasher::{HashError, PasswordHasher};
pub use ports::photo_store::{PhotoStore, PhotoUpload};
pub use ports::repository_error::RepositoryError;
pub use ports::user_repository::UserRepository;
pub use services::analytics_engine::AnalyticsEngine;
pub use services::journal_store::JournalStore;
pub use services::user_store::{DUMMY_DIGEST, UserStore};
