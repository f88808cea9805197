pub mod analytics_engine;
pub mod journal_store;
pub mod user_store;
