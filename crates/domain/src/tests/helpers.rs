// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Address, DeliveryDate, Email, Name, Order, OrderBuilder, OrderDescription, Phone, Tag,
};
use time::Date;
use time::macros::date;

/// The date every test treats as "today".
pub const TODAY: Date = date!(2021 - 12 - 20);

pub fn create_test_builder(name: &str, delivery_date: &str) -> OrderBuilder {
    OrderBuilder::new()
        .name(Name::new(name).unwrap())
        .phone(Phone::new("98765432").unwrap())
        .email(Email::new("johnd@example.com").unwrap())
        .address(Address::new("311, Clementi Ave 2, #02-25").unwrap())
        .order_description(OrderDescription::new("2 x Chocolate Cakes").unwrap())
        .tags([Tag::new("friends").unwrap()])
        .delivery_date(DeliveryDate::parse(delivery_date, TODAY).unwrap())
}

pub fn create_test_order(name: &str, delivery_date: &str) -> Order {
    create_test_builder(name, delivery_date).build().unwrap()
}

/// Builds an order due on `due`, validated against a date far enough back
/// that any `due` on or after `TODAY` passes the lead time.
pub fn create_order_due_on(name: &str, due: Date) -> Order {
    let validated_on: Date = date!(2000 - 01 - 01);
    OrderBuilder::new()
        .name(Name::new(name).unwrap())
        .phone(Phone::new("91234567").unwrap())
        .email(Email::new("customer@example.com").unwrap())
        .address(Address::new("1 Cake Street").unwrap())
        .order_description(OrderDescription::new("Strawberry Cake").unwrap())
        .delivery_date(DeliveryDate::from_date(due, validated_on).unwrap())
        .build()
        .unwrap()
}
