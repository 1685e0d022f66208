// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Customer name is empty or invalid.
    InvalidName(String),
    /// Phone number is empty or invalid.
    InvalidPhone(String),
    /// Email address is empty or invalid.
    InvalidEmail(String),
    /// Delivery address is blank.
    InvalidAddress(String),
    /// Order description is blank or too long.
    InvalidOrderDescription(String),
    /// Tag is not a single alphanumeric word or is too long.
    InvalidTag(String),
    /// Order item type is blank or too long.
    InvalidOrderItemType(String),
    /// Delivery date could not be parsed or falls inside the lead time.
    InvalidDeliveryDate {
        /// The rejected input.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },
    /// An index token is not a positive integer.
    InvalidIndexToken {
        /// The offending token.
        token: String,
    },
    /// An index token is numeric but above the largest accepted index.
    IndexTooLarge {
        /// The offending token.
        token: String,
        /// The largest accepted one-based index.
        max: u32,
    },
    /// No index was supplied where at least one is required.
    MissingIndex,
    /// A required order field was never supplied to the builder.
    MissingField(&'static str),
    /// An order was built without any order description.
    MissingOrderDescriptions,
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Timezone name is not a known IANA zone.
    InvalidTimezone(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidPhone(msg) => write!(f, "Invalid phone: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidAddress(msg) => write!(f, "Invalid address: {msg}"),
            Self::InvalidOrderDescription(msg) => {
                write!(f, "Invalid order description: {msg}")
            }
            Self::InvalidTag(msg) => write!(f, "Invalid tag: {msg}"),
            Self::InvalidOrderItemType(msg) => write!(f, "Invalid order item type: {msg}"),
            Self::InvalidDeliveryDate { input, reason } => {
                write!(f, "Invalid delivery date '{input}': {reason}")
            }
            Self::InvalidIndexToken { token } => {
                write!(f, "Index '{token}' is not a non-zero unsigned integer")
            }
            Self::IndexTooLarge { token, max } => {
                write!(f, "Index '{token}' is larger than the maximum index {max}")
            }
            Self::MissingIndex => write!(f, "At least one index must be provided"),
            Self::MissingField(field) => write!(f, "Missing required field: {field}"),
            Self::MissingOrderDescriptions => {
                write!(f, "An order needs at least one order description")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::InvalidTimezone(name) => write!(f, "Unknown timezone: {name}"),
        }
    }
}

impl std::error::Error for DomainError {}
