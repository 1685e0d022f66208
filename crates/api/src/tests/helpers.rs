// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{AddOrderRequest, Request, Response, handle_request};
use cake_collate::Model;
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2021 - 12 - 20);

pub fn create_add_request(name: &str) -> AddOrderRequest {
    AddOrderRequest {
        name: name.to_string(),
        phone: String::from("98765432"),
        email: String::from("johnd@example.com"),
        address: String::from("311, Clementi Ave 2, #02-25"),
        order_descriptions: vec![String::from("Chocolate Cake")],
        order_item_indices: String::new(),
        tags: vec![String::from("friends")],
        delivery_date: String::from("01/01/2022"),
        request: None,
    }
}

pub fn add(model: &mut Model, request: AddOrderRequest) -> Response {
    handle_request(model, Request::Add(request), TODAY).unwrap()
}
