// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use cake_collate_domain::{IndexList, OrderBuilder, OrderItem, ReminderDatePredicate};

/// A command represents user intent as data only.
///
/// Commands are the only way to request changes to the [`crate::Model`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new order.
    AddOrder {
        /// Positions in the displayed order item list whose types become
        /// order descriptions. May be empty.
        order_item_indices: IndexList,
        /// The order fields collected so far.
        descriptor: OrderBuilder,
    },
    /// Delete the orders at the given displayed positions.
    DeleteOrders {
        /// Positions in the displayed order list, as typed.
        target_indices: IndexList,
    },
    /// Display only orders due inside a reminder window.
    RemindOrders {
        /// The window to filter by.
        predicate: ReminderDatePredicate,
    },
    /// Display every order.
    ListOrders,
    /// Add an entry to the order item catalog.
    AddOrderItem {
        /// The entry to add.
        order_item: OrderItem,
    },
}

impl Command {
    /// Creates an add command.
    ///
    /// # Arguments
    ///
    /// * `order_item_indices` - Displayed order item positions to resolve
    /// * `descriptor` - The order fields
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingOrderDescriptions` if the descriptor holds no
    /// order description and no order item index was given.
    pub fn add_order(
        order_item_indices: IndexList,
        descriptor: OrderBuilder,
    ) -> Result<Self, CoreError> {
        if order_item_indices.is_empty() && !descriptor.has_order_descriptions() {
            return Err(CoreError::MissingOrderDescriptions);
        }
        Ok(Self::AddOrder {
            order_item_indices,
            descriptor,
        })
    }

    /// Returns the command word used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddOrder { .. } => "add",
            Self::DeleteOrders { .. } => "delete",
            Self::RemindOrders { .. } => "remind",
            Self::ListOrders => "list",
            Self::AddOrderItem { .. } => "addItem",
        }
    }
}

/// The outcome of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message shown to the user.
    pub feedback: String,
}

impl CommandResult {
    /// Creates a new `CommandResult`.
    #[must_use]
    pub const fn new(feedback: String) -> Self {
        Self { feedback }
    }
}
