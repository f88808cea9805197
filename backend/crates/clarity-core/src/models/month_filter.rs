use crate::{CoreError, Result as CoreErrorResult};

use chrono::{DateTime, TimeZone, Utc};

/// A calendar month (UTC) used to narrow entry listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthFilter {
    pub month: u32,
    pub year: i32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl MonthFilter {
    #[track_caller]
    pub fn new(month: u32, year: i32) -> CoreErrorResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::validation(
                "month",
                format!("month must be 1-12, got {month}"),
            ));
        }
        if !(1..=9999).contains(&year) {
            return Err(CoreError::validation(
                "year",
                format!("year must be a four-digit year, got {year}"),
            ));
        }

        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };

        let start = month_start(year, month)?;
        let end = month_start(next_year, next_month)?;

        Ok(Self {
            month,
            year,
            start,
            end,
        })
    }

    /// Month and year must be supplied together or not at all
    #[track_caller]
    pub fn from_parts(month: Option<&str>, year: Option<&str>) -> CoreErrorResult<Option<Self>> {
        match (month, year) {
            (None, None) => Ok(None),
            (Some(month), Some(year)) => {
                let month = month.trim().parse::<u32>().map_err(|_| {
                    CoreError::validation("month", format!("month is not a number: {month}"))
                })?;
                let year = year.trim().parse::<i32>().map_err(|_| {
                    CoreError::validation("year", format!("year is not a number: {year}"))
                })?;
                Self::new(month, year).map(Some)
            }
            (Some(_), None) => Err(CoreError::validation(
                "year",
                "year is required when month is given",
            )),
            (None, Some(_)) => Err(CoreError::validation(
                "month",
                "month is required when year is given",
            )),
        }
    }

    /// Inclusive start of the month
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive end of the month
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

#[track_caller]
fn month_start(year: i32, month: u32) -> CoreErrorResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| CoreError::validation("month", format!("invalid month {year}-{month:02}")))
}
