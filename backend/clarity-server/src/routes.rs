use crate::{
    ApiError, AppState, UPLOADS_URL_PREFIX, create_entry, delete_entry, get_analytics,
    get_entry, health, list_entries, login, profile, signup,
};

use std::panic::Location;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{get, post},
};
use error_location::ErrorLocation;
use log::warn;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;

/// Room for the text parts and multipart framing around a maximum-size photo
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_photo_bytes + MULTIPART_OVERHEAD_BYTES;
    let cors = cors_layer(&state.cors_origins);
    let uploads = ServeDir::new(&state.uploads_dir);

    let api = Router::new()
        // Accounts
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/profile", get(profile))
        // Journal
        .route("/journal/entries", post(create_entry).get(list_entries))
        .route("/journal/entries/{id}", get(get_entry).delete(delete_entry))
        .route("/journal/analytics", get(get_analytics))
        // Health check
        .route("/health", get(health::health_check));

    Router::new()
        .nest("/api", api)
        .nest_service(UPLOADS_URL_PREFIX, uploads)
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .with_state(state)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound {
        message: "Route not found".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Wildcards and origins that are not valid header values are skipped with a warning
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter(|origin| {
            let wildcard = origin.trim() == "*";
            if wildcard {
                warn!("Ignoring wildcard CORS origin; credentials require explicit origins");
            }
            !wildcard
        })
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true)
}
