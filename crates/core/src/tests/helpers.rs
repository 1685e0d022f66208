// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, CommandResult, CoreError, Model, execute};
use cake_collate_domain::{
    Address, DeliveryDate, Email, IndexList, Name, Order, OrderBuilder, OrderDescription,
    OrderItem, OrderItemType, Phone, Tag,
};
use time::macros::date;
use time::{Date, Duration};

/// The fixed "today" used across command tests.
pub const TODAY: Date = date!(2021 - 12 - 20);

/// A descriptor with every field except order descriptions.
pub fn create_base_builder(name: &str) -> OrderBuilder {
    OrderBuilder::new()
        .name(Name::new(name).unwrap())
        .phone(Phone::new("98765432").unwrap())
        .email(Email::new("johnd@example.com").unwrap())
        .address(Address::new("311, Clementi Ave 2, #02-25").unwrap())
        .tags([Tag::new("friends").unwrap()])
        .delivery_date(DeliveryDate::parse("01/01/2022", TODAY).unwrap())
}

/// A complete descriptor with one order description.
pub fn create_test_builder(name: &str, description: &str) -> OrderBuilder {
    create_base_builder(name).order_description(OrderDescription::new(description).unwrap())
}

/// A descriptor due `offset` days after `TODAY`.
pub fn create_builder_due_in(name: &str, offset: i64) -> OrderBuilder {
    let due: Date = TODAY + Duration::days(offset);
    create_test_builder(name, "Strawberry Cake")
        .delivery_date(DeliveryDate::from_date(due, date!(2000 - 01 - 01)).unwrap())
}

pub fn create_add_command(descriptor: OrderBuilder) -> Command {
    Command::add_order(IndexList::default(), descriptor).unwrap()
}

pub fn create_order_item(item_type: &str) -> OrderItem {
    OrderItem::new(OrderItemType::new(item_type).unwrap())
}

/// Executes an add command for each descriptor, panicking on failure.
pub fn create_model_with(descriptors: Vec<OrderBuilder>) -> Model {
    let mut model: Model = Model::new();
    for descriptor in descriptors {
        let result: Result<CommandResult, CoreError> =
            execute(&mut model, create_add_command(descriptor));
        assert!(result.is_ok(), "seeding failed: {result:?}");
    }
    model
}

/// A model holding the three orders Alice, Bob and Carol.
pub fn create_three_order_model() -> Model {
    create_model_with(vec![
        create_test_builder("Alice", "Chocolate Cake"),
        create_test_builder("Bob", "Chocolate Cake"),
        create_test_builder("Carol", "Chocolate Cake"),
    ])
}

pub fn names(orders: &[&Order]) -> Vec<String> {
    orders
        .iter()
        .map(|order: &&Order| order.name().value().to_string())
        .collect()
}
