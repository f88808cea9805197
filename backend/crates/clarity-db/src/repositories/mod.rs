pub mod sqlite_journal_repository;
pub mod sqlite_user_repository;

mod timestamps;
