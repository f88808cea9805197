use crate::tests::{TEST_SECRET, create_test_state};
use crate::{ApiError, AuthUser};

use clarity_auth::TokenService;
use clarity_core::UserId;

use axum::extract::FromRequestParts;
use axum::http::{Request, request::Parts};
use googletest::prelude::*;
use tempfile::TempDir;

fn parts_with_header(value: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri("/api/auth/profile");
    if let Some(value) = value {
        builder = builder.header("Authorization", value);
    }
    builder.body(()).unwrap().into_parts().0
}

#[tokio::test]
async fn given_valid_bearer_token_when_extracting_then_returns_user_id() {
    // Given
    let dir = TempDir::new().unwrap();
    let state = create_test_state(dir.path()).await;
    let token = state.tokens.issue(UserId(42)).unwrap();
    let mut parts = parts_with_header(Some(&format!("Bearer {token}")));

    // When
    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    // Then
    let AuthUser(user_id) = result.unwrap();
    assert_that!(user_id, eq(UserId(42)));
}

#[tokio::test]
async fn given_no_header_when_extracting_then_rejects_as_unauthorized() {
    // Given
    let dir = TempDir::new().unwrap();
    let state = create_test_state(dir.path()).await;
    let mut parts = parts_with_header(None);

    // When
    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    // Then
    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "MISSING_TOKEN",
            ..
        })
    ));
}

#[tokio::test]
async fn given_token_signed_with_other_secret_when_extracting_then_rejects_as_forbidden() {
    // Given
    let dir = TempDir::new().unwrap();
    let state = create_test_state(dir.path()).await;
    let other = TokenService::with_hs256(
        b"a-completely-different-signing-secret",
        chrono::Duration::days(7),
    )
    .unwrap();
    let token = other.issue(UserId(42)).unwrap();
    let mut parts = parts_with_header(Some(&format!("Bearer {token}")));

    // When
    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    // Then
    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[tokio::test]
async fn given_expired_token_when_extracting_then_rejects_as_unauthorized() {
    // Given
    let dir = TempDir::new().unwrap();
    let state = create_test_state(dir.path()).await;
    let tokens = TokenService::with_hs256(TEST_SECRET, chrono::Duration::days(7)).unwrap();
    let issued_at = chrono::Utc::now() - chrono::Duration::days(8);
    let token = tokens.issue_at(UserId(42), issued_at).unwrap();
    let mut parts = parts_with_header(Some(&format!("Bearer {token}")));

    // When
    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    // Then
    assert!(matches!(
        result,
        Err(ApiError::Unauthorized {
            code: "TOKEN_EXPIRED",
            ..
        })
    ));
}
