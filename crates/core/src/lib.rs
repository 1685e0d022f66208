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

mod apply;
mod command;
mod error;
mod model;

#[cfg(test)]
mod tests;

use cake_collate_domain::{IndexList, OrderItems};

pub use apply::{execute, format_deleted_orders};
pub use command::{Command, CommandResult};
pub use error::CoreError;
pub use model::{Model, OrderFilter};

/// Checks that every index points into the displayed order item list.
///
/// This is a read-only validation that does not change the catalog.
///
/// # Arguments
///
/// * `order_items` - The displayed order items
/// * `indices` - The 1-based positions to check
///
/// # Errors
///
/// Returns `CoreError::InvalidOrderItemIndex` for the first index past the end.
pub fn validate_order_item_indices(
    order_items: &OrderItems,
    indices: &IndexList,
) -> Result<(), CoreError> {
    for index in indices {
        if index.zero_based() >= order_items.len() {
            return Err(CoreError::InvalidOrderItemIndex {
                index: index.one_based(),
                displayed: order_items.len(),
            });
        }
    }
    Ok(())
}
