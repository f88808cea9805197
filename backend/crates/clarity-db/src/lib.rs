pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database;
pub use error::{DbError, Result};
pub use repositories::sqlite_journal_repository::SqliteJournalRepository;
pub use repositories::sqlite_user_repository::SqliteUserRepository;
