use crate::tests::fakes::{CountingHasher, InMemoryUsers, PrefixHasher};
use crate::{CoreError, UserStore};

use std::sync::Arc;

use googletest::prelude::*;

fn store() -> UserStore {
    UserStore::new(Arc::new(InMemoryUsers::default()), Arc::new(PrefixHasher))
}

#[tokio::test]
async fn given_valid_signup_when_created_then_email_is_normalized_and_password_hashed() {
    let store = store();

    let user = store
        .create_user(" Ada@Example.com ", "secret1", "Ada", "Lovelace")
        .await
        .unwrap();

    assert_that!(user.email, eq("ada@example.com"));
    assert_that!(user.password_digest, eq("hashed:secret1"));
    assert_that!(user.first_name, eq("Ada"));
}

#[tokio::test]
async fn given_existing_email_when_created_again_then_conflict() {
    let store = store();
    store
        .create_user("ada@example.com", "secret1", "Ada", "Lovelace")
        .await
        .unwrap();

    let result = store
        .create_user("ADA@example.com", "another1", "Other", "Person")
        .await;

    match result {
        Err(CoreError::Conflict { message, .. }) => {
            assert_that!(message, eq("User with this email already exists"));
        }
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[tokio::test]
async fn given_short_password_when_created_then_validation_error() {
    let store = store();

    let result = store
        .create_user("ada@example.com", "12345", "Ada", "Lovelace")
        .await;

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[tokio::test]
async fn given_correct_password_when_authenticated_then_returns_user() {
    let store = store();
    let created = store
        .create_user("ada@example.com", "secret1", "Ada", "Lovelace")
        .await
        .unwrap();

    let user = store.authenticate("Ada@Example.com", "secret1").await.unwrap();

    assert_that!(user.id, eq(created.id));
}

#[tokio::test]
async fn given_wrong_password_or_unknown_email_when_authenticated_then_same_error() {
    let store = store();
    store
        .create_user("ada@example.com", "secret1", "Ada", "Lovelace")
        .await
        .unwrap();

    let wrong_password = store.authenticate("ada@example.com", "nope123").await;
    let unknown_email = store.authenticate("bob@example.com", "secret1").await;

    assert!(matches!(
        wrong_password,
        Err(CoreError::InvalidCredentials { .. })
    ));
    assert!(matches!(
        unknown_email,
        Err(CoreError::InvalidCredentials { .. })
    ));
}

#[tokio::test]
async fn given_wrong_password_or_unknown_email_when_authenticated_then_each_verifies_once() {
    // Given
    let hasher = Arc::new(CountingHasher::default());
    let store = UserStore::new(Arc::new(InMemoryUsers::default()), hasher.clone());
    store
        .create_user("ada@example.com", "secret1", "Ada", "Lovelace")
        .await
        .unwrap();

    // When
    let wrong_password = store.authenticate("ada@example.com", "nope123").await;
    let after_wrong_password = hasher.verify_calls();
    let unknown_email = store.authenticate("bob@example.com", "secret1").await;
    let after_unknown_email = hasher.verify_calls();

    // Then
    assert!(wrong_password.is_err());
    assert!(unknown_email.is_err());
    assert_that!(after_wrong_password, eq(1));
    assert_that!(after_unknown_email, eq(2));
}

#[tokio::test]
async fn given_unknown_id_when_fetched_then_not_found() {
    let store = store();

    let by_id = store.get_by_id(crate::UserId(42)).await;
    let by_email = store.get_by_email("ghost@example.com").await;

    assert!(matches!(by_id, Err(CoreError::NotFound { .. })));
    assert!(matches!(by_email, Err(CoreError::NotFound { .. })));
}
