//! Field-level input rules shared by the services and the HTTP boundary.

use crate::{CoreError, Result as CoreErrorResult};

use std::ops::RangeInclusive;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_NAME_LENGTH: usize = 100;
pub const INTENSITY_RANGE: RangeInclusive<i32> = 1..=10;
pub const CONFIDENCE_RANGE: RangeInclusive<i32> = 0..=100;

#[track_caller]
pub fn validate_intensity(intensity: i32) -> CoreErrorResult<()> {
    if !INTENSITY_RANGE.contains(&intensity) {
        return Err(CoreError::validation(
            "intensity",
            format!(
                "intensity must be {}-{}, got {}",
                INTENSITY_RANGE.start(),
                INTENSITY_RANGE.end(),
                intensity
            ),
        ));
    }
    Ok(())
}

#[track_caller]
pub fn validate_confidence(confidence: i32) -> CoreErrorResult<()> {
    if !CONFIDENCE_RANGE.contains(&confidence) {
        return Err(CoreError::validation(
            "confidence",
            format!(
                "confidence must be {}-{}, got {}",
                CONFIDENCE_RANGE.start(),
                CONFIDENCE_RANGE.end(),
                confidence
            ),
        ));
    }
    Ok(())
}

/// Accepts `local@domain.tld` shapes; deliverability is not checked
#[track_caller]
pub fn validate_email(email: &str) -> CoreErrorResult<()> {
    let invalid = || CoreError::validation("email", "Valid email is required");

    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH || email.contains(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }

    Ok(())
}

#[track_caller]
pub fn validate_password(password: &str) -> CoreErrorResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::validation(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }
    Ok(())
}

/// Names are trimmed before the check
#[track_caller]
pub fn validate_name(field: &str, label: &str, value: &str) -> CoreErrorResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(field, format!("{label} is required")));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::validation(
            field,
            format!("{label} must be at most {MAX_NAME_LENGTH} characters"),
        ));
    }
    Ok(())
}
