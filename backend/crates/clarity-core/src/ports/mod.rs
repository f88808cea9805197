//! Traits the services depend on; adapters live in other crates.

pub mod journal_repository;
pub mod password_hasher;
pub mod photo_store;
pub mod repository_error;
pub mod user_repository;
