#![allow(dead_code)]

//! Test infrastructure for clarity-server API tests

use clarity_auth::TokenService;
use clarity_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-long-enough";
pub const TEST_MAX_PHOTO_BYTES: usize = 64 * 1024;
pub const BOUNDARY: &str = "clarity-test-boundary";

/// Router over an in-memory database; keep the TempDir alive for uploads
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub uploads: TempDir,
}

pub async fn create_test_app() -> TestApp {
    let pool = clarity_db::database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let tokens = TokenService::with_hs256(TEST_SECRET, chrono::Duration::days(7))
        .expect("Failed to create token service");
    let uploads = TempDir::new().expect("Failed to create uploads dir");

    let state = AppState::new(
        pool,
        tokens,
        uploads.path().to_path_buf(),
        TEST_MAX_PHOTO_BYTES,
        vec!["http://localhost:3000".to_string()],
    );

    TestApp {
        router: build_router(state.clone()),
        state,
        uploads,
    }
}

impl TestApp {
    /// Send a request and decode the JSON body (Null when empty or not JSON)
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn get_authed(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn delete_authed(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// POST /api/journal/entries with the given multipart parts
    pub async fn create_entry(&self, token: &str, parts: &[Part<'_>]) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/journal/entries")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap();
        self.send(request).await
    }

    /// Sign up and return (token, user id)
    pub async fn signup(&self, email: &str) -> (String, i64) {
        let (status, json) = self
            .post_json(
                "/api/auth/signup",
                json!({
                    "email": email,
                    "password": "password123",
                    "firstName": "Test",
                    "lastName": "User",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "signup failed: {json}");

        let token = json["token"].as_str().unwrap().to_string();
        let user_id = json["user"]["id"].as_i64().unwrap();
        (token, user_id)
    }
}

/// One multipart part
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
}

pub fn multipart_body(parts: &[Part]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}
