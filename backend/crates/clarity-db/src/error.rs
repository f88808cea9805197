use clarity_core::{ErrorLocation, RepositoryError};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Undecodable column {column}: {message} {location}")]
    Decode {
        column: String,
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub(crate) fn decode<S: Into<String>>(column: &str, message: S) -> Self {
        Self::Decode {
            column: column.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for RepositoryError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            DbError::Sqlx {
                source: sqlx::Error::Database(db),
                ..
            } if db.is_unique_violation() => RepositoryError::Duplicate {
                message: db.message().to_string(),
                location,
            },
            e @ DbError::Decode { .. } => RepositoryError::Corrupt {
                message: e.to_string(),
                location,
            },
            other => RepositoryError::Query {
                message: other.to_string(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
