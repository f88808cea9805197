//! Journal REST API handlers
//!
//! Every handler is scoped to the authenticated caller; another user's
//! entry is indistinguishable from a missing one.

use crate::{
    AnalyticsQuery, AnalyticsResponse, ApiError, ApiResult, AppState, AuthUser,
    CreateEntryResponse, DeleteResponse, EntryDto, EntryForm, EntryListResponse, EntryResponse,
    ListEntriesQuery,
};

use clarity_core::{AnalyticsPeriod, CoreError, EntryId, MonthFilter};

use std::panic::Location;

use axum::{
    Json,
    extract::{
        Multipart, Path, Query, State,
        multipart::MultipartRejection,
        rejection::QueryRejection,
    },
    http::StatusCode,
};
use error_location::ErrorLocation;
use log::warn;

const ENTRY_NOT_FOUND: &str = "Journal entry not found";

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/journal/entries
///
/// Multipart body; the optional `photo` part is stored before the entry is
/// written and only after the text fields pass validation. A failed write
/// removes the stored photo again.
pub async fn create_entry(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<(StatusCode, Json<CreateEntryResponse>)> {
    let form = EntryForm::from_multipart(multipart?, state.max_photo_bytes).await?;
    form.fields.validate()?;

    let photo_ref = match form.photo {
        Some(upload) => Some(state.photos.store(upload).await.map_err(CoreError::from)?),
        None => None,
    };

    let created = state
        .journal
        .create_entry(user_id, form.fields, photo_ref.clone())
        .await;

    // No entry references the photo of a failed write
    if let (Err(_), Some(photo_ref)) = (&created, &photo_ref) {
        if let Err(e) = state.photos.remove(photo_ref).await {
            warn!("Failed to discard photo {} after entry write failed: {}", photo_ref, e);
        }
    }

    let entry = created?;

    Ok((
        StatusCode::CREATED,
        Json(CreateEntryResponse {
            message: "Journal entry created successfully".to_string(),
            entry: entry.into(),
        }),
    ))
}

/// GET /api/journal/entries?month=&year=
pub async fn list_entries(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    query: Result<Query<ListEntriesQuery>, QueryRejection>,
) -> ApiResult<Json<EntryListResponse>> {
    let Query(query) = query?;
    let month = MonthFilter::from_parts(query.month.as_deref(), query.year.as_deref())?;

    let entries = state.journal.list_entries(user_id, month).await?;

    Ok(Json(EntryListResponse {
        entries: entries.into_iter().map(EntryDto::from).collect(),
    }))
}

/// GET /api/journal/entries/{id}
pub async fn get_entry(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<EntryResponse>> {
    let entry_id = parse_entry_id(&id)?;
    let entry = state.journal.get_entry(entry_id, user_id).await?;

    Ok(Json(EntryResponse {
        entry: entry.into(),
    }))
}

/// DELETE /api/journal/entries/{id}
pub async fn delete_entry(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let entry_id = parse_entry_id(&id)?;
    state.journal.delete_entry(entry_id, user_id).await?;

    Ok(Json(DeleteResponse {
        message: "Journal entry deleted successfully".to_string(),
    }))
}

/// GET /api/journal/analytics?period=week|month|all
pub async fn get_analytics(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    query: Result<Query<AnalyticsQuery>, QueryRejection>,
) -> ApiResult<Json<AnalyticsResponse>> {
    let Query(query) = query?;
    let period = match query.period.as_deref() {
        Some(period) => period.parse::<AnalyticsPeriod>()?,
        None => AnalyticsPeriod::default(),
    };

    let report = state.analytics.compute_analytics(user_id, period).await?;

    Ok(Json(report.into()))
}

// =============================================================================
// Helpers
// =============================================================================

/// Ids that cannot exist are reported the same way as missing ones
#[track_caller]
fn parse_entry_id(id: &str) -> ApiResult<EntryId> {
    id.parse::<EntryId>().map_err(|_| ApiError::NotFound {
        message: ENTRY_NOT_FOUND.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
