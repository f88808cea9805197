//! Axum extractor for bearer-token authentication

use crate::{ApiError, AppState};

use clarity_core::UserId;

use std::future::Future;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

/// The authenticated caller, taken from `Authorization: Bearer <token>`.
///
/// Rejects with 401 when the token is missing or expired and 403 when it
/// is malformed or fails signature checks.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub UserId);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let user_id = state.tokens.validate_header(header)?;
            log::debug!("Authenticated request for user {}", user_id);

            Ok(AuthUser(user_id))
        }
    }
}
