//! Multipart body of `POST /api/journal/entries`.
//!
//! Every part except `photo` is text. List parts carry a JSON array of
//! strings; structured parts carry JSON (or plain text, kept as a string).

use crate::{ApiError, ApiResult};

use clarity_core::{
    AnalysisPayload, CoreError, EntryFields, PhotoUpload, Result as CoreErrorResult,
    StructuredFields,
};

use std::panic::Location;

use axum::extract::Multipart;
use axum::extract::multipart::Field;
use bytes::BytesMut;
use error_location::ErrorLocation;

pub const PHOTO_FIELD: &str = "photo";

#[derive(Debug, Default)]
pub struct EntryForm {
    pub fields: EntryFields,
    pub photo: Option<PhotoUpload>,
}

impl EntryForm {
    /// Read every part; the photo is buffered up to `max_photo_bytes`
    pub async fn from_multipart(mut multipart: Multipart, max_photo_bytes: usize) -> ApiResult<Self> {
        let mut form = EntryForm::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == PHOTO_FIELD {
                form.photo = read_photo(field, max_photo_bytes).await?;
                continue;
            }

            let text = field.text().await?;
            apply_form_field(&mut form.fields, &name, &text)?;
        }

        Ok(form)
    }
}

/// Set the entry field `name` from its text value.
///
/// Blank values leave the field absent. Returns false for names that are
/// not entry fields.
#[track_caller]
pub fn apply_form_field(fields: &mut EntryFields, name: &str, text: &str) -> CoreErrorResult<bool> {
    if text.trim().is_empty() {
        return Ok(is_entry_field(name));
    }

    match name {
        "mood" => fields.mood = Some(text.to_string()),
        "notes" => fields.notes = Some(text.to_string()),
        "primary_emotion" => fields.primary_emotion = Some(text.to_string()),
        "secondary_emotion" => fields.secondary_emotion = Some(text.to_string()),
        "intensity" => fields.intensity = Some(parse_whole_number(name, text)?),
        "confidence" => fields.confidence = Some(parse_whole_number(name, text)?),
        "emotions" => fields.emotions = Some(parse_string_list(name, text)?),
        "insights" => fields.insights = Some(parse_string_list(name, text)?),
        "tips" => fields.tips = Some(parse_string_list(name, text)?),
        _ => match fields.analysis.slot_mut(name) {
            Some(slot) => *slot = Some(AnalysisPayload::from_form_text(name, text)?),
            None => {
                log::debug!("Ignoring unknown entry form field '{}'", name);
                return Ok(false);
            }
        },
    }

    Ok(true)
}

fn is_entry_field(name: &str) -> bool {
    matches!(
        name,
        "mood"
            | "notes"
            | "primary_emotion"
            | "secondary_emotion"
            | "intensity"
            | "confidence"
            | "emotions"
            | "insights"
            | "tips"
    ) || StructuredFields::FIELD_NAMES.contains(&name)
}

#[track_caller]
fn parse_whole_number(name: &str, text: &str) -> CoreErrorResult<i32> {
    text.trim()
        .parse()
        .map_err(|_| CoreError::validation(name, format!("{name} must be a whole number")))
}

#[track_caller]
fn parse_string_list(name: &str, text: &str) -> CoreErrorResult<Vec<String>> {
    serde_json::from_str(text).map_err(|_| {
        CoreError::validation(name, format!("{name} must be a JSON array of strings"))
    })
}

/// `None` for an empty file input (no file chosen on the client)
async fn read_photo(mut field: Field<'_>, max_photo_bytes: usize) -> ApiResult<Option<PhotoUpload>> {
    let file_name = field.file_name().map(str::to_string);
    if file_name.as_deref() == Some("") {
        return Ok(None);
    }

    let content_type = field.content_type().unwrap_or_default().to_string();
    if !content_type.starts_with("image/") {
        return Err(photo_error("Only image files are allowed"));
    }

    let mut buffer = BytesMut::new();
    while let Some(chunk) = field.chunk().await? {
        if buffer.len() + chunk.len() > max_photo_bytes {
            return Err(photo_error(format!(
                "Photo must be at most {} bytes",
                max_photo_bytes
            )));
        }
        buffer.extend_from_slice(&chunk);
    }

    if buffer.is_empty() {
        return Ok(None);
    }

    Ok(Some(PhotoUpload {
        file_name,
        content_type,
        bytes: buffer.freeze(),
    }))
}

#[track_caller]
fn photo_error<S: Into<String>>(message: S) -> ApiError {
    ApiError::Validation {
        message: message.into(),
        field: Some(PHOTO_FIELD.to_string()),
        location: ErrorLocation::from(Location::caller()),
    }
}
