// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, CommandResult};
use crate::error::CoreError;
use crate::model::{Model, OrderFilter};
use cake_collate_domain::{
    DomainError, IndexList, Order, OrderBuilder, OrderDescription, OrderItem, OrderItems,
    ReminderDatePredicate,
};
use tracing::{debug, info};

/// Executes a command against the model.
///
/// # Arguments
///
/// * `model` - The order book to change
/// * `command` - The command to execute
///
/// # Returns
///
/// * `Ok(CommandResult)` with the feedback message for the user
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - An index is past the end of the displayed list it refers to
/// - The order would duplicate a tracked order
/// - The order item is already in the catalog
/// - A domain rule is violated
///
/// Adding an order is not transactional: order descriptions typed by the user
/// are added to the catalog before indices are checked, and remain there if
/// the command then fails.
pub fn execute(model: &mut Model, command: Command) -> Result<CommandResult, CoreError> {
    let command_name: &'static str = command.name();
    debug!(command = command_name, "Executing command");

    let result: Result<CommandResult, CoreError> = match command {
        Command::AddOrder {
            order_item_indices,
            descriptor,
        } => add_order(model, &order_item_indices, descriptor),
        Command::DeleteOrders { target_indices } => delete_orders(model, &target_indices),
        Command::RemindOrders { predicate } => Ok(remind_orders(model, predicate)),
        Command::ListOrders => Ok(list_orders(model)),
        Command::AddOrderItem { order_item } => add_order_item(model, order_item),
    };

    match &result {
        Ok(_) => info!(
            command = command_name,
            orders = model.orders().len(),
            order_items = model.order_items().len(),
            "Command executed"
        ),
        Err(err) => info!(command = command_name, error = %err, "Command rejected"),
    }

    result
}

/// Formats the feedback for a delete command.
///
/// A single order is reported on one line; several are listed one per line
/// under a plural heading.
#[must_use]
pub fn format_deleted_orders(deleted: &[Order]) -> String {
    if let [order] = deleted {
        return format!("Deleted Order: {order}");
    }

    let lines: Vec<String> = deleted.iter().map(ToString::to_string).collect();
    format!("Deleted Orders:\n{}", lines.join("\n"))
}

fn add_order(
    model: &mut Model,
    order_item_indices: &IndexList,
    descriptor: OrderBuilder,
) -> Result<CommandResult, CoreError> {
    if order_item_indices.is_empty() && !descriptor.has_order_descriptions() {
        return Err(CoreError::MissingOrderDescriptions);
    }

    let descriptor: OrderBuilder = sync_order_items(model, descriptor)?;

    let resolved: Vec<OrderDescription> =
        resolve_order_item_indices(model.order_items(), order_item_indices)?;
    let descriptor: OrderBuilder =
        sync_order_items(model, descriptor.order_descriptions(resolved))?;

    let order: Order = descriptor.build()?;
    if model.has_order(&order) {
        return Err(CoreError::DuplicateOrder);
    }

    let feedback: String = format!("New order added: {order}");
    model.add_order(order);
    Ok(CommandResult::new(feedback))
}

/// Adds a catalog entry for every description the catalog does not know yet.
///
/// Each description is rewritten to the spelling of its catalog entry, so
/// descriptions naming the same item collapse into one.
fn sync_order_items(
    model: &mut Model,
    descriptor: OrderBuilder,
) -> Result<OrderBuilder, CoreError> {
    let mut canonical: Vec<OrderDescription> = Vec::new();

    for description in descriptor.collected_order_descriptions() {
        let order_item: OrderItem = OrderItem::from_description(description)?;
        if model.add_order_item(order_item) {
            debug!(order_item = description.value(), "Added order item to catalog");
        }

        let spelled: OrderDescription = match model.order_items().find(description.value()) {
            Some(entry) => entry.to_order_description()?,
            None => description.clone(),
        };
        canonical.push(spelled);
    }

    Ok(descriptor.with_order_descriptions(canonical))
}

/// Maps displayed order item positions to order descriptions.
///
/// Every index is checked before any is mapped.
fn resolve_order_item_indices(
    order_items: &OrderItems,
    indices: &IndexList,
) -> Result<Vec<OrderDescription>, CoreError> {
    crate::validate_order_item_indices(order_items, indices)?;

    let displayed: &[OrderItem] = order_items.as_slice();
    indices
        .iter()
        .filter_map(|index| displayed.get(index.zero_based()))
        .map(OrderItem::to_order_description)
        .collect::<Result<Vec<OrderDescription>, DomainError>>()
        .map_err(CoreError::from)
}

fn delete_orders(
    model: &mut Model,
    target_indices: &IndexList,
) -> Result<CommandResult, CoreError> {
    if target_indices.is_empty() {
        return Err(CoreError::DomainViolation(DomainError::MissingIndex));
    }

    let last_shown: Vec<Order> = model.filtered_orders().into_iter().cloned().collect();
    let mut deleted: Vec<Order> = Vec::new();

    for index in target_indices {
        let Some(order) = last_shown.get(index.zero_based()) else {
            return Err(CoreError::InvalidOrderIndex {
                index: index.one_based(),
                displayed: last_shown.len(),
            });
        };

        if model.delete_order(order) {
            deleted.push(order.clone());
        } else {
            debug!(index = index.one_based(), "Order already deleted, skipping");
        }
    }

    Ok(CommandResult::new(format_deleted_orders(&deleted)))
}

fn remind_orders(model: &mut Model, predicate: ReminderDatePredicate) -> CommandResult {
    model.update_order_filter(OrderFilter::DueWithin(predicate));
    let listed: usize = model.filtered_orders().len();
    CommandResult::new(format!("{listed} orders listed!"))
}

fn list_orders(model: &mut Model) -> CommandResult {
    model.update_order_filter(OrderFilter::All);
    CommandResult::new(String::from("Listed all orders"))
}

fn add_order_item(model: &mut Model, order_item: OrderItem) -> Result<CommandResult, CoreError> {
    if model.has_order_item(&order_item) {
        return Err(CoreError::DuplicateOrderItem(
            order_item.item_type().value().to_string(),
        ));
    }

    let feedback: String = format!("New order item added: {order_item}");
    model.add_order_item(order_item);
    Ok(CommandResult::new(feedback))
}
