// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Self-validating scalar fields of an order.
//!
//! Every constructor trims surrounding whitespace before validating, so
//! values coming straight from a tokenizer can be handed over as-is.

use crate::error::DomainError;

/// Characters allowed between alphanumeric runs in the local part of an email.
const EMAIL_SPECIAL_CHARACTERS: &[char] = &['+', '_', '.', '-'];

/// Represents a customer's name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name {
    /// The trimmed name.
    value: String,
}

impl Name {
    /// The maximum number of characters in a name.
    pub const MAX_LENGTH: usize = 70;

    /// Creates a new `Name`.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw name (surrounding whitespace is ignored)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty
    /// - The name contains anything other than alphanumeric characters and spaces
    /// - The name is longer than [`Name::MAX_LENGTH`]
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidName(String::from("Name cannot be empty")));
        }

        if !trimmed
            .chars()
            .all(|c: char| c.is_ascii_alphanumeric() || c == ' ')
        {
            return Err(DomainError::InvalidName(String::from(
                "Name should only contain alphanumeric characters and spaces",
            )));
        }

        let length: usize = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(DomainError::InvalidName(format!(
                "Name must be at most {} characters, got {length}",
                Self::MAX_LENGTH
            )));
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the name value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Represents a customer's phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phone {
    /// The digits of the phone number.
    value: String,
}

impl Phone {
    /// The minimum number of digits in a phone number.
    pub const MIN_DIGITS: usize = 3;
    /// The maximum number of digits in a phone number.
    pub const MAX_DIGITS: usize = 20;

    /// Creates a new `Phone`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not made of digits only, or has fewer
    /// than [`Phone::MIN_DIGITS`] or more than [`Phone::MAX_DIGITS`] digits.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();

        if trimmed.is_empty() || !trimmed.bytes().all(|b: u8| b.is_ascii_digit()) {
            return Err(DomainError::InvalidPhone(String::from(
                "Phone numbers should only contain digits",
            )));
        }

        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&trimmed.len()) {
            return Err(DomainError::InvalidPhone(format!(
                "Phone numbers must be between {} and {} digits long, got {}",
                Self::MIN_DIGITS,
                Self::MAX_DIGITS,
                trimmed.len()
            )));
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the phone number.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Represents a customer's email address.
///
/// Emails have the shape `local-part@domain`:
/// - the local part is alphanumeric runs joined by single `+`, `_`, `.` or `-`
/// - the domain is one or more labels separated by `.`, each label being
///   alphanumeric runs joined by single hyphens
/// - the final domain label is at least two characters long
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email {
    /// The trimmed email address.
    value: String,
}

impl Email {
    /// The maximum number of characters in an email address.
    pub const MAX_LENGTH: usize = 254;

    /// Creates a new `Email`.
    ///
    /// # Errors
    ///
    /// Returns an error if the address does not follow the documented shape
    /// or is longer than [`Email::MAX_LENGTH`].
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();

        if trimmed.len() > Self::MAX_LENGTH {
            return Err(DomainError::InvalidEmail(format!(
                "Email must be at most {} characters",
                Self::MAX_LENGTH
            )));
        }

        let Some((local_part, domain)) = trimmed.split_once('@') else {
            return Err(DomainError::InvalidEmail(String::from(
                "Email must be of the format local-part@domain",
            )));
        };

        if !is_valid_local_part(local_part) {
            return Err(DomainError::InvalidEmail(format!(
                "Local part '{local_part}' may only contain alphanumerics and single +_.- separators"
            )));
        }

        if !is_valid_domain(domain) {
            return Err(DomainError::InvalidEmail(format!(
                "Domain '{domain}' must be period-separated labels ending in at least two characters"
            )));
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the email address.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Checks that `text` is alphanumeric runs joined by single separators from `separators`.
fn is_joined_alphanumeric_runs(text: &str, separators: &[char]) -> bool {
    !text.is_empty()
        && text
            .split(|c: char| separators.contains(&c))
            .all(|run: &str| {
                !run.is_empty() && run.chars().all(|c: char| c.is_ascii_alphanumeric())
            })
}

fn is_valid_local_part(local_part: &str) -> bool {
    is_joined_alphanumeric_runs(local_part, EMAIL_SPECIAL_CHARACTERS)
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some(last_label) = labels.last() else {
        return false;
    };

    labels
        .iter()
        .all(|label: &&str| is_joined_alphanumeric_runs(label, &['-']))
        && last_label.len() >= 2
}

/// Represents a delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    /// The trimmed address.
    value: String,
}

impl Address {
    /// Creates a new `Address`.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is blank.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidAddress(String::from("Address cannot be blank")));
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the address.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Represents one line of what the customer ordered, e.g. "2 x Chocolate Cake".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderDescription {
    /// The trimmed description.
    value: String,
}

impl OrderDescription {
    /// The maximum number of characters in an order description.
    pub const MAX_LENGTH: usize = 70;

    /// Creates a new `OrderDescription`.
    ///
    /// # Errors
    ///
    /// Returns an error if the description is blank or longer than
    /// [`OrderDescription::MAX_LENGTH`].
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidOrderDescription(String::from(
                "Order description cannot be blank",
            )));
        }

        let length: usize = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(DomainError::InvalidOrderDescription(format!(
                "Order description must be at most {} characters, got {length}",
                Self::MAX_LENGTH
            )));
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the description.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for OrderDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Represents a free-form label attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    /// The tag name.
    value: String,
}

impl Tag {
    /// The maximum number of characters in a tag.
    pub const MAX_LENGTH: usize = 30;

    /// Creates a new `Tag`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is empty, contains anything other than
    /// alphanumeric characters, or is longer than [`Tag::MAX_LENGTH`].
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();

        if trimmed.is_empty() || !trimmed.chars().all(|c: char| c.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidTag(String::from(
                "Tags should be a single alphanumeric word",
            )));
        }

        if trimmed.len() > Self::MAX_LENGTH {
            return Err(DomainError::InvalidTag(format!(
                "Tags must be at most {} characters, got {}",
                Self::MAX_LENGTH,
                trimmed.len()
            )));
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the tag name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.value)
    }
}

/// Represents a special request attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Request {
    /// The trimmed request text.
    value: String,
}

impl Request {
    /// Creates a `Request` from user input.
    ///
    /// Returns `None` for blank input, which means the order carries no request.
    #[must_use]
    pub fn from_input(value: &str) -> Option<Self> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the request text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
