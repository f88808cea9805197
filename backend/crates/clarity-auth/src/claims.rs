use crate::{AuthError, Result as AuthErrorResult};

use clarity_core::UserId;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims issued at login and signup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id, decimal)
    pub sub: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Not before (Unix seconds)
    pub nbf: i64,
    /// Expiration (Unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Resolve the subject once the signature has been verified
    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<UserId> {
        match self.sub.parse::<UserId>() {
            Ok(id) if id.0 > 0 => Ok(id),
            _ => Err(AuthError::MalformedOrForged {
                message: format!("subject is not a user id: '{}'", self.sub),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
