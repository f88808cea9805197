use crate::ErrorLocation;

use thiserror::Error;

/// Failures reported by persistence adapters
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// A uniqueness constraint rejected the write
    #[error("Duplicate record: {message} {location}")]
    Duplicate {
        message: String,
        location: ErrorLocation,
    },

    /// The query or mutation failed to execute
    #[error("Query failed: {message} {location}")]
    Query {
        message: String,
        location: ErrorLocation,
    },

    /// A stored row could not be decoded into its domain type
    #[error("Corrupt record: {message} {location}")]
    Corrupt {
        message: String,
        location: ErrorLocation,
    },

    /// The photo content store failed
    #[error("Photo storage failed: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },
}
