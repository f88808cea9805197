use crate::ApiError;

use clarity_auth::AuthError;
use clarity_core::{CoreError, ErrorLocation};

use std::panic::Location;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Journal entry not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Journal entry not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_core_validation_maps_to_400_with_field() {
    let error = ApiError::from(CoreError::validation("intensity", "Intensity must be 1-10"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "intensity");
}

#[tokio::test]
async fn test_core_conflict_maps_to_409() {
    let error = ApiError::from(CoreError::Conflict {
        message: "User with this email already exists".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["message"], "User with this email already exists");
}

#[tokio::test]
async fn test_invalid_credentials_maps_to_401_with_generic_message() {
    let error = ApiError::from(CoreError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(json["error"]["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_internal_error_hides_detail() {
    let error = ApiError::from(CoreError::internal("disk I/O error at /var/lib/clarity.db"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Internal server error");
}

#[tokio::test]
async fn test_missing_token_maps_to_401() {
    let error = ApiError::from(AuthError::MissingToken {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "MISSING_TOKEN");
    assert_eq!(json["error"]["message"], "Access token required");
}

#[tokio::test]
async fn test_expired_token_maps_to_401() {
    let error = ApiError::from(AuthError::Expired {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "TOKEN_EXPIRED");
}

#[tokio::test]
async fn test_forged_token_maps_to_403() {
    let error = ApiError::from(AuthError::MalformedOrForged {
        message: "InvalidSignature".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_signing_setup_error_is_internal() {
    let error = ApiError::from(AuthError::InvalidSecret {
        message: "empty".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, _json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
