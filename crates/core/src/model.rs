// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cake_collate_domain::{Order, OrderItem, OrderItems, ReminderDatePredicate};

/// Which orders are currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderFilter {
    /// Every tracked order.
    #[default]
    All,
    /// Orders due inside a reminder window.
    DueWithin(ReminderDatePredicate),
}

impl OrderFilter {
    /// Returns whether `order` is displayed under this filter.
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            Self::All => true,
            Self::DueWithin(predicate) => predicate.test(order),
        }
    }
}

/// The in-memory order book.
///
/// The model owns every tracked order, the order item catalog, and the filter
/// deciding which orders are displayed. Index-based commands always resolve
/// against the displayed lists. Mutation is only possible through
/// [`crate::execute`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    /// All tracked orders in insertion order.
    orders: Vec<Order>,
    /// Known order item types.
    order_items: OrderItems,
    /// Filter applied to `orders` for display.
    order_filter: OrderFilter,
}

impl Model {
    /// Creates an empty model displaying all orders.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            orders: Vec::new(),
            order_items: OrderItems::new(),
            order_filter: OrderFilter::All,
        }
    }

    /// Returns every tracked order, ignoring the filter.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Returns the order item catalog.
    #[must_use]
    pub const fn order_items(&self) -> &OrderItems {
        &self.order_items
    }

    /// Returns the active order filter.
    #[must_use]
    pub const fn order_filter(&self) -> OrderFilter {
        self.order_filter
    }

    /// Returns the displayed orders in insertion order.
    #[must_use]
    pub fn filtered_orders(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order: &&Order| self.order_filter.matches(order))
            .collect()
    }

    /// Returns the displayed order items.
    ///
    /// The whole catalog is always displayed.
    #[must_use]
    pub fn filtered_order_items(&self) -> &[OrderItem] {
        self.order_items.as_slice()
    }

    /// Checks if an equal order is tracked.
    #[must_use]
    pub fn has_order(&self, order: &Order) -> bool {
        self.orders.contains(order)
    }

    /// Checks if an order item with the same type is in the catalog.
    #[must_use]
    pub fn has_order_item(&self, order_item: &OrderItem) -> bool {
        self.order_items.contains(order_item)
    }

    /// Adds an order.
    pub(crate) fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Adds an order item unless one with the same type exists.
    ///
    /// Returns `true` if the catalog grew.
    pub(crate) fn add_order_item(&mut self, order_item: OrderItem) -> bool {
        self.order_items.insert(order_item)
    }

    /// Removes the order equal to `order`.
    ///
    /// Returns `true` if an order was removed.
    pub(crate) fn delete_order(&mut self, order: &Order) -> bool {
        match self.orders.iter().position(|existing: &Order| existing == order) {
            Some(position) => {
                self.orders.remove(position);
                true
            }
            None => false,
        }
    }

    /// Replaces the filter deciding which orders are displayed.
    pub(crate) const fn update_order_filter(&mut self, order_filter: OrderFilter) {
        self.order_filter = order_filter;
    }
}
