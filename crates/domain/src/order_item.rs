// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The catalog of reusable order item types.

use crate::error::DomainError;
use crate::types::OrderDescription;

/// The kind of thing an order item names, e.g. "Chocolate Cake".
///
/// Two types are the same catalog entry when their normalized keys match:
/// surrounding whitespace removed, inner whitespace runs collapsed to a single
/// space, and ASCII letters lowercased. The display text keeps the casing it
/// was first entered with.
#[derive(Debug, Clone)]
pub struct OrderItemType {
    /// The display text with whitespace collapsed.
    value: String,
    /// The normalized identity key.
    key: String,
}

impl PartialEq for OrderItemType {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for OrderItemType {}

impl std::hash::Hash for OrderItemType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl OrderItemType {
    /// Creates a new `OrderItemType`.
    ///
    /// # Errors
    ///
    /// Returns an error if the type is blank or longer than
    /// [`OrderDescription::MAX_LENGTH`], since every type must be usable as an
    /// order description.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let collapsed: String = value.split_whitespace().collect::<Vec<&str>>().join(" ");

        if collapsed.is_empty() {
            return Err(DomainError::InvalidOrderItemType(String::from(
                "Order item type cannot be blank",
            )));
        }

        let length: usize = collapsed.chars().count();
        if length > OrderDescription::MAX_LENGTH {
            return Err(DomainError::InvalidOrderItemType(format!(
                "Order item type must be at most {} characters, got {length}",
                OrderDescription::MAX_LENGTH
            )));
        }

        Ok(Self {
            key: Self::normalize(&collapsed),
            value: collapsed,
        })
    }

    /// Returns the normalized identity key for arbitrary text.
    #[must_use]
    pub fn normalize(text: &str) -> String {
        text.split_whitespace()
            .collect::<Vec<&str>>()
            .join(" ")
            .to_ascii_lowercase()
    }

    /// Returns the display text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the normalized identity key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Display for OrderItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// An entry in the order item catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderItem {
    /// What this item is.
    item_type: OrderItemType,
}

impl OrderItem {
    /// Creates a new `OrderItem`.
    #[must_use]
    pub const fn new(item_type: OrderItemType) -> Self {
        Self { item_type }
    }

    /// Creates the catalog entry matching an order description.
    ///
    /// # Errors
    ///
    /// Returns an error if the description is not a valid order item type.
    pub fn from_description(description: &OrderDescription) -> Result<Self, DomainError> {
        Ok(Self::new(OrderItemType::new(description.value())?))
    }

    /// Returns the item type.
    #[must_use]
    pub const fn item_type(&self) -> &OrderItemType {
        &self.item_type
    }

    /// Converts this item into an order description.
    ///
    /// # Errors
    ///
    /// Returns an error if the type text is not a valid order description.
    pub fn to_order_description(&self) -> Result<OrderDescription, DomainError> {
        OrderDescription::new(self.item_type.value())
    }
}

impl std::fmt::Display for OrderItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.item_type)
    }
}

/// A deduplicated, insertion-ordered catalog of order items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderItems {
    /// Catalog entries in the order they were added.
    items: Vec<OrderItem>,
}

impl OrderItems {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Checks if an item with the same normalized type exists.
    #[must_use]
    pub fn contains(&self, item: &OrderItem) -> bool {
        self.items.contains(item)
    }

    /// Looks up an item by the normalized form of `text`.
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&OrderItem> {
        let key: String = OrderItemType::normalize(text);
        self.items
            .iter()
            .find(|item: &&OrderItem| item.item_type().key() == key)
    }

    /// Adds an item unless an equal one is already present.
    ///
    /// Returns `true` if the catalog grew.
    pub fn insert(&mut self, item: OrderItem) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
