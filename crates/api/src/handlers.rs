// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AddOrderItemRequest, AddOrderRequest, DeleteOrdersRequest, OrderInfo, RemindOrdersRequest,
    Request, Response,
};
use cake_collate::{Command, CommandResult, Model, execute};
use cake_collate_domain::{
    Address, DeliveryDate, DomainError, Email, IndexList, Name, Order, OrderBuilder,
    OrderDescription, OrderItem, OrderItemType, Phone, ReminderDatePredicate, Tag,
};
use time::Date;
use tracing::{debug, warn};

/// Handles a request against the model.
///
/// This function:
/// 1. Validates the raw request text with the domain constructors
/// 2. Builds the matching command
/// 3. Executes it
/// 4. Describes the displayed lists after execution
///
/// # Arguments
///
/// * `model` - The order book
/// * `request` - The raw request
/// * `today` - The date delivery dates and reminder windows are measured from
///
/// # Returns
///
/// * `Ok(Response)` with the feedback and the displayed lists
/// * `Err(ApiError)` if validation or execution fails
///
/// # Errors
///
/// Returns an error if:
/// - Any field fails validation
/// - The command fails to execute
pub fn handle_request(
    model: &mut Model,
    request: Request,
    today: Date,
) -> Result<Response, ApiError> {
    let command: Command = build_command(request, today).inspect_err(|err: &ApiError| {
        warn!(error = %err, "Rejected request during validation");
    })?;

    let result: CommandResult = execute(model, command)
        .map_err(translate_core_error)
        .inspect_err(|err: &ApiError| warn!(error = %err, "Rejected request during execution"))?;

    Ok(describe_model(model, result.feedback))
}

/// Builds the command for a request.
///
/// # Errors
///
/// Returns an error if any field fails validation.
pub fn build_command(request: Request, today: Date) -> Result<Command, ApiError> {
    match request {
        Request::Add(add) => build_add_command(&add, today),
        Request::Delete(DeleteOrdersRequest { indices }) => {
            let target_indices: IndexList =
                IndexList::parse(&indices).map_err(translate_domain_error)?;
            debug!(count = target_indices.len(), "Parsed delete indices");
            Ok(Command::DeleteOrders { target_indices })
        }
        Request::Remind(RemindOrdersRequest { days }) => Ok(Command::RemindOrders {
            predicate: ReminderDatePredicate::new(i64::from(days), today),
        }),
        Request::List => Ok(Command::ListOrders),
        Request::AddOrderItem(AddOrderItemRequest { order_item_type }) => {
            let item_type: OrderItemType =
                OrderItemType::new(&order_item_type).map_err(translate_domain_error)?;
            Ok(Command::AddOrderItem {
                order_item: OrderItem::new(item_type),
            })
        }
    }
}

/// Describes the displayed orders and order items.
#[must_use]
pub fn describe_model(model: &Model, message: String) -> Response {
    let orders: Vec<OrderInfo> = model
        .filtered_orders()
        .into_iter()
        .enumerate()
        .map(|(position, order): (usize, &Order)| order_info(position + 1, order))
        .collect();

    let order_items: Vec<String> = model
        .filtered_order_items()
        .iter()
        .map(|item: &OrderItem| item.item_type().value().to_string())
        .collect();

    Response {
        message,
        orders,
        order_items,
    }
}

/// Converts an order into its displayed form.
#[must_use]
pub fn order_info(index: usize, order: &Order) -> OrderInfo {
    OrderInfo {
        index,
        name: order.name().value().to_string(),
        phone: order.phone().value().to_string(),
        email: order.email().value().to_string(),
        address: order.address().value().to_string(),
        order_descriptions: order
            .order_descriptions()
            .iter()
            .map(|description: &OrderDescription| description.value().to_string())
            .collect(),
        tags: order
            .tags()
            .iter()
            .map(|tag: &Tag| tag.value().to_string())
            .collect(),
        delivery_date: order.delivery_date().to_string(),
        request: order
            .request()
            .map(|request: &cake_collate_domain::Request| request.value().to_string()),
    }
}

fn build_add_command(add: &AddOrderRequest, today: Date) -> Result<Command, ApiError> {
    let order_descriptions: Vec<OrderDescription> = add
        .order_descriptions
        .iter()
        .map(|text: &String| OrderDescription::new(text))
        .collect::<Result<Vec<OrderDescription>, DomainError>>()
        .map_err(translate_domain_error)?;

    let tags: Vec<Tag> = add
        .tags
        .iter()
        .map(|text: &String| Tag::new(text))
        .collect::<Result<Vec<Tag>, DomainError>>()
        .map_err(translate_domain_error)?;

    let descriptor: OrderBuilder = OrderBuilder::new()
        .name(Name::new(&add.name).map_err(translate_domain_error)?)
        .phone(Phone::new(&add.phone).map_err(translate_domain_error)?)
        .email(Email::new(&add.email).map_err(translate_domain_error)?)
        .address(Address::new(&add.address).map_err(translate_domain_error)?)
        .order_descriptions(order_descriptions)
        .tags(tags)
        .delivery_date(
            DeliveryDate::parse(&add.delivery_date, today).map_err(translate_domain_error)?,
        )
        .request(
            add.request
                .as_deref()
                .and_then(cake_collate_domain::Request::from_input),
        );

    let order_item_indices: IndexList =
        IndexList::parse_optional(&add.order_item_indices).map_err(translate_domain_error)?;

    Command::add_order(order_item_indices, descriptor).map_err(translate_core_error)
}
