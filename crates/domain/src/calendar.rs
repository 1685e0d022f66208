// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wall-clock "today" in a declared timezone.
//!
//! Delivery dates and reminders compare against a calendar date, not an
//! instant, so "today" depends on where the bakery is. The timezone is an
//! IANA name such as `Asia/Singapore`.

use crate::error::DomainError;
use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use time::{Date, Month};

/// Returns the current calendar date in `timezone`.
///
/// # Arguments
///
/// * `timezone` - An IANA timezone name
///
/// # Errors
///
/// Returns an error if:
/// - The timezone name is unknown
/// - The resulting date cannot be represented
pub fn today_in_timezone(timezone: &str) -> Result<Date, DomainError> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| DomainError::InvalidTimezone(timezone.to_string()))?;

    let local_today: NaiveDate = Utc::now().with_timezone(&tz).date_naive();
    naive_date_to_date(local_today)
}

/// Converts a `chrono::NaiveDate` into a `time::Date`.
///
/// # Errors
///
/// Returns an error if the date lies outside the range `time::Date` supports.
pub fn naive_date_to_date(naive: NaiveDate) -> Result<Date, DomainError> {
    let conversion_error = || DomainError::DateArithmeticOverflow {
        operation: format!("converting {naive} to a calendar date"),
    };

    let month_number: u8 = u8::try_from(naive.month()).map_err(|_| conversion_error())?;
    let month: Month = Month::try_from(month_number).map_err(|_| conversion_error())?;
    let day: u8 = u8::try_from(naive.day()).map_err(|_| conversion_error())?;

    Date::from_calendar_date(naive.year(), month, day).map_err(|_| conversion_error())
}
