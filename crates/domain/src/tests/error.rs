// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid name: test");

    let err: DomainError = DomainError::InvalidIndexToken {
        token: String::from("-1"),
    };
    assert_eq!(
        format!("{err}"),
        "Index '-1' is not a non-zero unsigned integer"
    );

    let err: DomainError = DomainError::IndexTooLarge {
        token: String::from("2147483648"),
        max: 2_147_483_647,
    };
    assert_eq!(
        format!("{err}"),
        "Index '2147483648' is larger than the maximum index 2147483647"
    );

    let err: DomainError = DomainError::MissingIndex;
    assert_eq!(format!("{err}"), "At least one index must be provided");

    let err: DomainError = DomainError::MissingField("name");
    assert_eq!(format!("{err}"), "Missing required field: name");

    let err: DomainError = DomainError::InvalidDeliveryDate {
        input: String::from("12122012"),
        reason: String::from("bad format"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid delivery date '12122012': bad format"
    );

    let err: DomainError = DomainError::InvalidTimezone(String::from("Mars/Olympus"));
    assert_eq!(format!("{err}"), "Unknown timezone: Mars/Olympus");
}

#[test]
fn test_domain_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DomainError::MissingOrderDescriptions);
    assert_eq!(
        err.to_string(),
        "An order needs at least one order description"
    );
}
