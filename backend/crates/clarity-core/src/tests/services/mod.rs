mod analytics_engine;
mod journal_store;
mod user_store;
