// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod delivery_date;
mod error;
mod index;
mod order;
mod order_item;
mod reminder;
mod types;

#[cfg(test)]
mod tests;

pub use calendar::{naive_date_to_date, today_in_timezone};
pub use delivery_date::{DeliveryDate, earliest_delivery_date, is_valid_delivery_date};
pub use error::DomainError;
pub use index::{Index, IndexList};
pub use order::{Order, OrderBuilder};
pub use order_item::{OrderItem, OrderItemType, OrderItems};
pub use reminder::ReminderDatePredicate;
pub use types::{Address, Email, Name, OrderDescription, Phone, Request, Tag};
