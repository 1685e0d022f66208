// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry raw, unvalidated text. Validation happens when a request is
//! turned into a command.

use crate::error::ApiError;

/// A request naming one command, tagged by the `command` field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Request {
    /// Add an order.
    Add(AddOrderRequest),
    /// Delete orders by displayed position.
    Delete(DeleteOrdersRequest),
    /// Display orders due soon.
    Remind(RemindOrdersRequest),
    /// Display all orders.
    List,
    /// Add an order item type to the catalog.
    AddOrderItem(AddOrderItemRequest),
}

/// API request to add a new order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddOrderRequest {
    /// The customer's name.
    pub name: String,
    /// The customer's phone number.
    pub phone: String,
    /// The customer's email address.
    pub email: String,
    /// The delivery address.
    pub address: String,
    /// Free-text order descriptions.
    #[serde(default)]
    pub order_descriptions: Vec<String>,
    /// Whitespace-separated 1-based positions in the displayed order item list.
    #[serde(default)]
    pub order_item_indices: String,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// The delivery date text.
    pub delivery_date: String,
    /// An optional request note.
    #[serde(default)]
    pub request: Option<String>,
}

/// API request to delete orders.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteOrdersRequest {
    /// Whitespace-separated 1-based positions in the displayed order list.
    pub indices: String,
}

/// API request to display orders due within a number of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RemindOrdersRequest {
    /// Width of the reminder window in days.
    pub days: u32,
}

/// API request to add an order item type.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddOrderItemRequest {
    /// The order item type text.
    pub order_item_type: String,
}

/// A displayed order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OrderInfo {
    /// The 1-based displayed position.
    pub index: usize,
    /// The customer's name.
    pub name: String,
    /// The customer's phone number.
    pub phone: String,
    /// The customer's email address.
    pub email: String,
    /// The delivery address.
    pub address: String,
    /// The order descriptions in sorted order.
    pub order_descriptions: Vec<String>,
    /// The tags in sorted order.
    pub tags: Vec<String>,
    /// The delivery date, formatted as `dd Mmm yyyy`.
    pub delivery_date: String,
    /// The request note, if any.
    pub request: Option<String>,
}

/// API response for a successfully executed request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Response {
    /// The feedback message for the user.
    pub message: String,
    /// The displayed orders after the command ran.
    pub orders: Vec<OrderInfo>,
    /// The displayed order item types after the command ran.
    pub order_items: Vec<String>,
}

/// API response for a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    /// The error kind, see [`ApiError::kind`].
    pub error: String,
    /// A human-readable description of the error.
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}
