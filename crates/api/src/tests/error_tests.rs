// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, ErrorResponse, translate_core_error, translate_domain_error};
use cake_collate::CoreError;
use cake_collate_domain::DomainError;

#[test]
fn test_field_errors_name_their_field() {
    let err: ApiError = translate_domain_error(DomainError::InvalidEmail(String::from("bad")));

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("email"),
            message: String::from("bad"),
        }
    );
}

#[test]
fn test_missing_field_uses_field_name() {
    let err: ApiError = translate_domain_error(DomainError::MissingField("delivery date"));

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "delivery date"));
}

#[test]
fn test_index_errors_map_to_indices_field() {
    let err: ApiError = translate_domain_error(DomainError::IndexTooLarge {
        token: String::from("2147483648"),
        max: 2_147_483_647,
    });

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "indices"));
}

#[test]
fn test_core_domain_violation_is_unwrapped() {
    let err: ApiError =
        translate_core_error(CoreError::DomainViolation(DomainError::MissingIndex));

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("indices"),
            message: String::from("At least one index must be provided"),
        }
    );
}

#[test]
fn test_order_item_index_error() {
    let err: ApiError = translate_core_error(CoreError::InvalidOrderItemIndex {
        index: 4,
        displayed: 2,
    });

    assert_eq!(
        err.to_string(),
        "The order item index provided is invalid: 4 (2 displayed)"
    );
    assert_eq!(err.kind(), "invalid_index");
}

#[test]
fn test_error_response_carries_kind_and_message() {
    let err: ApiError = translate_core_error(CoreError::DuplicateOrder);
    let response: ErrorResponse = ErrorResponse::from(&err);

    assert_eq!(response.error, "domain_rule_violation");
    assert_eq!(
        response.message,
        "Domain rule violation (unique_order): This order already exists in CakeCollate"
    );
}
