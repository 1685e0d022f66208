// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use cake_collate::CoreError;
use cake_collate_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An index points past the end of a displayed list.
    InvalidIndex {
        /// Which list the index refers to.
        list: String,
        /// The 1-based index given.
        index: usize,
        /// How many entries were displayed.
        displayed: usize,
    },
}

impl ApiError {
    /// Returns a short machine-readable name for the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DomainRuleViolation { .. } => "domain_rule_violation",
            Self::InvalidInput { .. } => "invalid_input",
            Self::InvalidIndex { .. } => "invalid_index",
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::InvalidIndex {
                list,
                index,
                displayed,
            } => {
                write!(
                    f,
                    "The {list} index provided is invalid: {index} ({displayed} displayed)"
                )
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This function explicitly maps each domain error variant to an appropriate
/// API error, ensuring domain errors are not leaked directly.
///
/// # Arguments
///
/// * `err` - The domain error to translate
///
/// # Returns
///
/// An API error with a human-readable message
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidName(msg) => invalid_input("name", msg),
        DomainError::InvalidPhone(msg) => invalid_input("phone", msg),
        DomainError::InvalidEmail(msg) => invalid_input("email", msg),
        DomainError::InvalidAddress(msg) => invalid_input("address", msg),
        DomainError::InvalidOrderDescription(msg) => invalid_input("order_description", msg),
        DomainError::InvalidTag(msg) => invalid_input("tag", msg),
        DomainError::InvalidOrderItemType(msg) => invalid_input("order_item_type", msg),
        DomainError::InvalidDeliveryDate { input, reason } => {
            invalid_input("delivery_date", format!("{reason} (got '{input}')"))
        }
        err @ (DomainError::InvalidIndexToken { .. }
        | DomainError::IndexTooLarge { .. }
        | DomainError::MissingIndex) => invalid_input("indices", err.to_string()),
        DomainError::MissingField(field) => {
            invalid_input(field, format!("Missing required field: {field}"))
        }
        DomainError::MissingOrderDescriptions => missing_order_descriptions(),
        DomainError::DateArithmeticOverflow { operation } => invalid_input(
            "date",
            format!("Date arithmetic overflow while {operation}"),
        ),
        DomainError::InvalidTimezone(name) => {
            invalid_input("timezone", format!("Unknown timezone: {name}"))
        }
    }
}

/// Translates a core error into an API error.
///
/// # Arguments
///
/// * `err` - The core error to translate
///
/// # Returns
///
/// An API error with a human-readable message
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::InvalidOrderIndex { index, displayed } => ApiError::InvalidIndex {
            list: String::from("order"),
            index,
            displayed,
        },
        CoreError::InvalidOrderItemIndex { index, displayed } => ApiError::InvalidIndex {
            list: String::from("order item"),
            index,
            displayed,
        },
        CoreError::DuplicateOrder => ApiError::DomainRuleViolation {
            rule: String::from("unique_order"),
            message: String::from("This order already exists in CakeCollate"),
        },
        CoreError::DuplicateOrderItem(item_type) => ApiError::DomainRuleViolation {
            rule: String::from("unique_order_item"),
            message: format!("Order item '{item_type}' already exists in CakeCollate"),
        },
        CoreError::MissingOrderDescriptions => missing_order_descriptions(),
    }
}

fn invalid_input(field: &str, message: String) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message,
    }
}

fn missing_order_descriptions() -> ApiError {
    ApiError::DomainRuleViolation {
        rule: String::from("order_requires_description"),
        message: String::from("An order needs at least one order description or order item index"),
    }
}
