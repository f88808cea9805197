use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the token from an `Authorization` header value.
///
/// An absent or empty header and any scheme other than `Bearer` all count as
/// no credential presented.
#[track_caller]
pub fn bearer_token(header: Option<&str>) -> AuthErrorResult<&str> {
    let missing = || AuthError::MissingToken {
        location: ErrorLocation::from(Location::caller()),
    };

    let token = header
        .map(str::trim)
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .ok_or_else(missing)?;

    if token.is_empty() {
        return Err(missing());
    }

    Ok(token)
}
