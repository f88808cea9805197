//! Account REST API handlers

use crate::{
    ApiError, ApiResult, AppState, AuthResponse, AuthUser, LoginRequest, ProfileResponse,
    SignupRequest, UserDto,
};

use clarity_core::models::user::normalize_email;
use clarity_core::validation;

use std::panic::Location;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use error_location::ErrorLocation;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let Json(req) = payload?;

    let user = state
        .users
        .create_user(&req.email, &req.password, &req.first_name, &req.last_name)
        .await?;
    let token = state.tokens.issue(user.id)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User created successfully".to_string(),
            token,
            user: user.into(),
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(req) = payload?;

    validation::validate_email(&normalize_email(&req.email))?;
    if req.password.is_empty() {
        return Err(ApiError::Validation {
            message: "Password is required".to_string(),
            field: Some("password".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let user = state.users.authenticate(&req.email, &req.password).await?;
    let token = state.tokens.issue(user.id)?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: user.into(),
    }))
}

/// GET /api/auth/profile
pub async fn profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let user = state.users.get_by_id(user_id).await?;

    Ok(Json(ProfileResponse {
        user: UserDto::from(user),
    }))
}
