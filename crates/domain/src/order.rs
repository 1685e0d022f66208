// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::delivery_date::DeliveryDate;
use crate::error::DomainError;
use crate::types::{Address, Email, Name, OrderDescription, Phone, Request, Tag};
use std::collections::BTreeSet;

/// A customer's cake order.
///
/// Two orders are the same order when every field except the request note
/// matches. The request note is commentary on an order, not part of what was
/// ordered.
#[derive(Debug, Clone)]
pub struct Order {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    /// What was ordered; never empty.
    order_descriptions: BTreeSet<OrderDescription>,
    tags: BTreeSet<Tag>,
    delivery_date: DeliveryDate,
    request: Option<Request>,
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.email == other.email
            && self.address == other.address
            && self.order_descriptions == other.order_descriptions
            && self.tags == other.tags
            && self.delivery_date == other.delivery_date
    }
}

impl Eq for Order {}

impl std::hash::Hash for Order {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.phone.hash(state);
        self.email.hash(state);
        self.address.hash(state);
        self.order_descriptions.hash(state);
        self.tags.hash(state);
        self.delivery_date.hash(state);
    }
}

impl Order {
    /// Returns the customer's name.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the customer's phone number.
    #[must_use]
    pub const fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Returns the customer's email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the delivery address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the order descriptions in sorted order.
    #[must_use]
    pub const fn order_descriptions(&self) -> &BTreeSet<OrderDescription> {
        &self.order_descriptions
    }

    /// Returns the tags in sorted order.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns the delivery date.
    #[must_use]
    pub const fn delivery_date(&self) -> &DeliveryDate {
        &self.delivery_date
    }

    /// Returns the request note, if any.
    #[must_use]
    pub const fn request(&self) -> Option<&Request> {
        self.request.as_ref()
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Order Descriptions: ",
            self.name, self.phone, self.email, self.address
        )?;

        let descriptions: Vec<&str> = self
            .order_descriptions
            .iter()
            .map(OrderDescription::value)
            .collect();
        f.write_str(&descriptions.join(", "))?;

        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{tag}")?;
            }
        }

        write!(f, "; Delivery Date: {}", self.delivery_date)?;

        if let Some(request) = &self.request {
            write!(f, "; Request: {request}")?;
        }

        Ok(())
    }
}

/// Accumulates the fields of an order and builds it in one step.
///
/// Order descriptions and tags are sets: adding the same value twice keeps one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBuilder {
    name: Option<Name>,
    phone: Option<Phone>,
    email: Option<Email>,
    address: Option<Address>,
    order_descriptions: BTreeSet<OrderDescription>,
    tags: BTreeSet<Tag>,
    delivery_date: Option<DeliveryDate>,
    request: Option<Request>,
}

impl OrderBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the customer's name.
    #[must_use]
    pub fn name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    /// Sets the customer's phone number.
    #[must_use]
    pub fn phone(mut self, phone: Phone) -> Self {
        self.phone = Some(phone);
        self
    }

    /// Sets the customer's email address.
    #[must_use]
    pub fn email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    /// Sets the delivery address.
    #[must_use]
    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Adds one order description.
    #[must_use]
    pub fn order_description(mut self, order_description: OrderDescription) -> Self {
        self.order_descriptions.insert(order_description);
        self
    }

    /// Adds several order descriptions.
    #[must_use]
    pub fn order_descriptions(
        mut self,
        order_descriptions: impl IntoIterator<Item = OrderDescription>,
    ) -> Self {
        self.order_descriptions.extend(order_descriptions);
        self
    }

    /// Replaces every collected order description.
    #[must_use]
    pub fn with_order_descriptions(
        mut self,
        order_descriptions: impl IntoIterator<Item = OrderDescription>,
    ) -> Self {
        self.order_descriptions = order_descriptions.into_iter().collect();
        self
    }

    /// Adds several tags.
    #[must_use]
    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    /// Sets the delivery date.
    #[must_use]
    pub fn delivery_date(mut self, delivery_date: DeliveryDate) -> Self {
        self.delivery_date = Some(delivery_date);
        self
    }

    /// Sets or clears the request note.
    #[must_use]
    pub fn request(mut self, request: Option<Request>) -> Self {
        self.request = request;
        self
    }

    /// Returns the order descriptions collected so far.
    #[must_use]
    pub const fn collected_order_descriptions(&self) -> &BTreeSet<OrderDescription> {
        &self.order_descriptions
    }

    /// Returns whether at least one order description has been collected.
    #[must_use]
    pub fn has_order_descriptions(&self) -> bool {
        !self.order_descriptions.is_empty()
    }

    /// Builds the order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Name, phone, email, address or delivery date was never set
    /// - No order description was collected
    pub fn build(self) -> Result<Order, DomainError> {
        if self.order_descriptions.is_empty() {
            return Err(DomainError::MissingOrderDescriptions);
        }

        Ok(Order {
            name: self.name.ok_or(DomainError::MissingField("name"))?,
            phone: self.phone.ok_or(DomainError::MissingField("phone"))?,
            email: self.email.ok_or(DomainError::MissingField("email"))?,
            address: self.address.ok_or(DomainError::MissingField("address"))?,
            order_descriptions: self.order_descriptions,
            tags: self.tags,
            delivery_date: self
                .delivery_date
                .ok_or(DomainError::MissingField("delivery date"))?,
            request: self.request,
        })
    }
}
