// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{TODAY, create_test_builder, create_test_order};
use crate::{
    Address, DeliveryDate, DomainError, Email, Name, Order, OrderBuilder, OrderDescription, Phone,
    Request,
};

#[test]
fn test_builder_produces_order_with_all_fields() {
    let order: Order = create_test_builder("John Doe", "01/01/2022")
        .request(Request::from_input("less sugar"))
        .build()
        .unwrap();

    assert_eq!(order.name().value(), "John Doe");
    assert_eq!(order.phone().value(), "98765432");
    assert_eq!(order.order_descriptions().len(), 1);
    assert_eq!(order.tags().len(), 1);
    assert_eq!(order.request().map(Request::value), Some("less sugar"));
}

#[test]
fn test_builder_requires_an_order_description() {
    let result: Result<Order, DomainError> = OrderBuilder::new()
        .name(Name::new("John Doe").unwrap())
        .phone(Phone::new("98765432").unwrap())
        .email(Email::new("johnd@example.com").unwrap())
        .address(Address::new("311, Clementi Ave 2").unwrap())
        .delivery_date(DeliveryDate::parse("01/01/2022", TODAY).unwrap())
        .build();

    assert_eq!(result, Err(DomainError::MissingOrderDescriptions));
}

#[test]
fn test_builder_reports_missing_required_field() {
    let result: Result<Order, DomainError> = OrderBuilder::new()
        .order_description(OrderDescription::new("Cheesecake").unwrap())
        .name(Name::new("John Doe").unwrap())
        .build();

    assert_eq!(result, Err(DomainError::MissingField("phone")));
}

#[test]
fn test_builder_collapses_duplicate_descriptions() {
    let builder: OrderBuilder = create_test_builder("John Doe", "01/01/2022").order_descriptions([
        OrderDescription::new("2 x Chocolate Cakes").unwrap(),
        OrderDescription::new("Strawberry Cake").unwrap(),
    ]);

    assert_eq!(builder.collected_order_descriptions().len(), 2);
    assert!(builder.has_order_descriptions());
}

#[test]
fn test_orders_with_same_fields_are_equal() {
    let first: Order = create_test_order("John Doe", "01/01/2022");
    let second: Order = create_test_order("John Doe", "01-01-2022");
    assert_eq!(first, second);
}

#[test]
fn test_request_does_not_affect_equality() {
    let plain: Order = create_test_order("John Doe", "01/01/2022");
    let with_request: Order = create_test_builder("John Doe", "01/01/2022")
        .request(Request::from_input("deliver before noon"))
        .build()
        .unwrap();
    assert_eq!(plain, with_request);
}

#[test]
fn test_orders_differing_in_any_field_are_not_equal() {
    let base: Order = create_test_order("John Doe", "01/01/2022");

    assert_ne!(base, create_test_order("Jane Doe", "01/01/2022"));
    assert_ne!(base, create_test_order("John Doe", "02/01/2022"));

    let extra_description: Order = create_test_builder("John Doe", "01/01/2022")
        .order_description(OrderDescription::new("Cheesecake").unwrap())
        .build()
        .unwrap();
    assert_ne!(base, extra_description);
}

#[test]
fn test_with_order_descriptions_replaces_collected_set() {
    let builder: OrderBuilder = create_test_builder("John Doe", "01/01/2022")
        .with_order_descriptions([OrderDescription::new("Cheesecake").unwrap()]);

    let descriptions: Vec<&str> = builder
        .collected_order_descriptions()
        .iter()
        .map(OrderDescription::value)
        .collect();
    assert_eq!(descriptions, vec!["Cheesecake"]);
}

#[test]
fn test_order_display() {
    let order: Order = create_test_builder("John Doe", "01/01/2022")
        .request(Request::from_input("less sugar"))
        .build()
        .unwrap();

    assert_eq!(
        format!("{order}"),
        "John Doe; Phone: 98765432; Email: johnd@example.com; Address: 311, Clementi Ave 2, #02-25; \
         Order Descriptions: 2 x Chocolate Cakes; Tags: [friends]; Delivery Date: 01 Jan 2022; \
         Request: less sugar"
    );
}
