// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reminder filtering of orders by delivery date.
//!
//! An order matches when its delivery date equals `today` or is strictly
//! before `today + days + 1`. The first clause only matters for negative
//! `days`; both clauses are evaluated as written.

use crate::order::Order;
use time::Date;

/// Matches orders due within a number of days of `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderDatePredicate {
    /// Width of the reminder window in days.
    days: i64,
    /// The date the window is anchored on.
    today: Date,
}

impl ReminderDatePredicate {
    /// Creates a predicate for the window anchored on `today`.
    ///
    /// # Arguments
    ///
    /// * `days` - Number of days after `today` still inside the window
    /// * `today` - The anchor date
    #[must_use]
    pub const fn new(days: i64, today: Date) -> Self {
        Self { days, today }
    }

    /// Returns the window width in days.
    #[must_use]
    pub const fn days(&self) -> i64 {
        self.days
    }

    /// Returns the anchor date.
    #[must_use]
    pub const fn today(&self) -> Date {
        self.today
    }

    /// Returns whether `order` is due inside the window.
    #[must_use]
    pub fn test(&self, order: &Order) -> bool {
        self.is_within_window(order.delivery_date().value())
    }

    /// Returns whether `date` falls inside the window.
    #[must_use]
    pub fn is_within_window(&self, date: Date) -> bool {
        let exclusive_bound: i64 = i64::from(self.today.to_julian_day())
            .saturating_add(self.days)
            .saturating_add(1);

        date == self.today || i64::from(date.to_julian_day()) < exclusive_bound
    }
}
