pub mod api;
pub mod app_state;
pub mod demo;
pub mod error;
pub mod health;
pub mod logger;
pub mod photo_store;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, profile, signup},
        auth_response::AuthResponse,
        login_request::LoginRequest,
        profile_response::ProfileResponse,
        signup_request::SignupRequest,
        user_dto::UserDto,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
    journal::{
        analytics_query::AnalyticsQuery,
        analytics_response::{AnalyticsResponse, EmotionGroupDto},
        create_entry_response::CreateEntryResponse,
        delete_response::DeleteResponse,
        entry_dto::EntryDto,
        entry_form::{EntryForm, apply_form_field},
        entry_list_response::EntryListResponse,
        entry_response::EntryResponse,
        journal::{create_entry, delete_entry, get_analytics, get_entry, list_entries},
        list_entries_query::ListEntriesQuery,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};
pub use photo_store::local_photo_store::{LocalPhotoStore, UPLOADS_URL_PREFIX};

pub use crate::routes::build_router;
