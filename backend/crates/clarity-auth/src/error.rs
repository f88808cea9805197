use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Access token required {location}")]
    MissingToken { location: ErrorLocation },

    #[error("Token expired {location}")]
    Expired { location: ErrorLocation },

    #[error("Invalid or forged token: {message} {location}")]
    MalformedOrForged {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid signing secret: {message} {location}")]
    InvalidSecret {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token signing failed: {source} {location}")]
    Signing {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingToken { .. } => "MISSING_TOKEN",
            Self::Expired { .. } => "TOKEN_EXPIRED",
            Self::MalformedOrForged { .. } => "INVALID_TOKEN",
            Self::InvalidSecret { .. } => "INVALID_SECRET",
            Self::Signing { .. } => "TOKEN_SIGNING_FAILED",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
