// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Delivery date parsing and the minimum lead time rule.
//!
//! ## Invariants
//!
//! - A delivery date parses under one of four textual formats:
//!   `dd/mm/yyyy`, `dd-mm-yyyy`, `dd.mm.yyyy` or `dd Mmm yyyy`
//! - A delivery date is on or after `today + 3 days`
//! - `today` is supplied by the caller on every construction, so the same
//!   input can be accepted today and rejected tomorrow

use crate::error::DomainError;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration};

const SLASH_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[day]/[month]/[year]");
const DASH_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[day]-[month]-[year]");
const DOT_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[day].[month].[year]");
const MONTH_NAME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day] [month repr:short] [year]");

/// Formats tried in order when parsing a delivery date.
const ACCEPTED_FORMATS: [&[BorrowedFormatItem<'static>]; 4] =
    [SLASH_FORMAT, DASH_FORMAT, DOT_FORMAT, MONTH_NAME_FORMAT];

/// Represents the date an order must be delivered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeliveryDate {
    /// The calendar date.
    value: Date,
}

impl DeliveryDate {
    /// Minimum number of days between validation and delivery.
    pub const LEAD_TIME_DAYS: i64 = 3;

    /// Parses and validates a delivery date.
    ///
    /// # Arguments
    ///
    /// * `input` - The raw date text (surrounding whitespace is ignored)
    /// * `today` - The date validation is performed on
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input matches none of the accepted formats
    /// - The date is earlier than `today` plus the lead time
    pub fn parse(input: &str, today: Date) -> Result<Self, DomainError> {
        let trimmed: &str = input.trim();

        let Some(value) = parse_calendar_date(trimmed) else {
            return Err(DomainError::InvalidDeliveryDate {
                input: trimmed.to_string(),
                reason: String::from(
                    "Delivery date should be a valid date of the format dd/mm/yyyy, dd-mm-yyyy, dd.mm.yyyy or dd MMM yyyy",
                ),
            });
        };

        check_lead_time(trimmed, value, today)?;
        Ok(Self { value })
    }

    /// Validates an already-parsed calendar date as a delivery date.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is earlier than `today` plus the lead time.
    pub fn from_date(value: Date, today: Date) -> Result<Self, DomainError> {
        check_lead_time(&value.to_string(), value, today)?;
        Ok(Self { value })
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn value(&self) -> Date {
        self.value
    }
}

impl std::fmt::Display for DeliveryDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text: String = self
            .value
            .format(MONTH_NAME_FORMAT)
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

/// Returns the earliest date a delivery may be scheduled for when validated on `today`.
///
/// # Errors
///
/// Returns an error if adding the lead time overflows the supported date range.
pub fn earliest_delivery_date(today: Date) -> Result<Date, DomainError> {
    today
        .checked_add(Duration::days(DeliveryDate::LEAD_TIME_DAYS))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("adding the delivery lead time to {today}"),
        })
}

/// Returns whether `input` is an acceptable delivery date when validated on `today`.
///
/// This is the pure form of [`DeliveryDate::parse`].
#[must_use]
pub fn is_valid_delivery_date(input: &str, today: Date) -> bool {
    DeliveryDate::parse(input, today).is_ok()
}

fn parse_calendar_date(input: &str) -> Option<Date> {
    ACCEPTED_FORMATS
        .iter()
        .find_map(|format: &&[BorrowedFormatItem<'static>]| Date::parse(input, *format).ok())
}

fn check_lead_time(input: &str, value: Date, today: Date) -> Result<(), DomainError> {
    let earliest: Date = earliest_delivery_date(today)?;
    if value < earliest {
        return Err(DomainError::InvalidDeliveryDate {
            input: input.to_string(),
            reason: format!(
                "Delivery date should be at least {} days after today ({today}), i.e. on or after {earliest}",
                DeliveryDate::LEAD_TIME_DAYS
            ),
        });
    }
    Ok(())
}
