use crate::{DbError, Result as DbErrorResult};

use chrono::{DateTime, Utc};

pub(crate) fn to_millis(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

#[track_caller]
pub(crate) fn from_millis(column: &str, millis: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DbError::decode(column, format!("timestamp out of range: {millis}")))
}

/// Drop sub-millisecond precision so a written value equals its read-back
#[track_caller]
pub(crate) fn truncate_to_millis(column: &str, at: DateTime<Utc>) -> DbErrorResult<DateTime<Utc>> {
    from_millis(column, to_millis(at))
}
