// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cake_collate_domain::DomainError;

/// Errors that can occur while executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// An index points past the end of the displayed order list.
    InvalidOrderIndex {
        /// The 1-based index the user gave.
        index: usize,
        /// How many orders were displayed.
        displayed: usize,
    },
    /// An index points past the end of the displayed order item list.
    InvalidOrderItemIndex {
        /// The 1-based index the user gave.
        index: usize,
        /// How many order items were displayed.
        displayed: usize,
    },
    /// An equal order is already tracked.
    DuplicateOrder,
    /// An order item with the same type is already in the catalog.
    DuplicateOrderItem(String),
    /// An add command carried neither order descriptions nor order item indices.
    MissingOrderDescriptions,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidOrderIndex { index, displayed } => write!(
                f,
                "The order index provided is invalid: {index} (displayed orders: {displayed})"
            ),
            Self::InvalidOrderItemIndex { index, displayed } => write!(
                f,
                "The order item index provided is invalid: {index} (displayed order items: {displayed})"
            ),
            Self::DuplicateOrder => write!(f, "This order already exists in CakeCollate"),
            Self::DuplicateOrderItem(item_type) => {
                write!(f, "Order item '{item_type}' already exists in CakeCollate")
            }
            Self::MissingOrderDescriptions => write!(
                f,
                "An order needs at least one order description or order item index"
            ),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
