// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Positional references into a displayed list.
//!
//! Users type 1-based positions; everything downstream works with 0-based
//! offsets. An [`IndexList`] keeps the order the user typed, including
//! repeated positions.

use crate::error::DomainError;
use std::num::IntErrorKind;

/// A position in a displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    /// The 0-based offset.
    zero_based: usize,
}

impl Index {
    /// Creates an `Index` from a 0-based offset.
    #[must_use]
    pub const fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// Creates an `Index` from a 1-based position.
    ///
    /// Returns `None` for position 0.
    #[must_use]
    pub const fn from_one_based(one_based: usize) -> Option<Self> {
        match one_based.checked_sub(1) {
            Some(zero_based) => Some(Self { zero_based }),
            None => None,
        }
    }

    /// Returns the 0-based offset.
    #[must_use]
    pub const fn zero_based(&self) -> usize {
        self.zero_based
    }

    /// Returns the 1-based position.
    #[must_use]
    pub const fn one_based(&self) -> usize {
        self.zero_based + 1
    }

    /// Parses a single 1-based index token.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The token is not made of ASCII digits only, or is zero
    /// - The token is larger than [`IndexList::MAX_ONE_BASED`]
    pub fn parse(token: &str) -> Result<Self, DomainError> {
        let trimmed: &str = token.trim();

        if trimmed.is_empty() || !trimmed.bytes().all(|b: u8| b.is_ascii_digit()) {
            return Err(DomainError::InvalidIndexToken {
                token: trimmed.to_string(),
            });
        }

        let value: u32 = trimmed.parse::<u32>().map_err(|err| match err.kind() {
            IntErrorKind::PosOverflow => DomainError::IndexTooLarge {
                token: trimmed.to_string(),
                max: IndexList::MAX_ONE_BASED,
            },
            _ => DomainError::InvalidIndexToken {
                token: trimmed.to_string(),
            },
        })?;

        if value > IndexList::MAX_ONE_BASED {
            return Err(DomainError::IndexTooLarge {
                token: trimmed.to_string(),
                max: IndexList::MAX_ONE_BASED,
            });
        }

        let one_based: usize = usize::try_from(value).map_err(|_| DomainError::IndexTooLarge {
            token: trimmed.to_string(),
            max: IndexList::MAX_ONE_BASED,
        })?;

        Self::from_one_based(one_based).ok_or_else(|| DomainError::InvalidIndexToken {
            token: trimmed.to_string(),
        })
    }
}

/// An ordered sequence of indices, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IndexList {
    /// The indices in input order.
    indices: Vec<Index>,
}

impl IndexList {
    /// The largest accepted 1-based index.
    pub const MAX_ONE_BASED: u32 = 2_147_483_647;

    /// Creates an `IndexList` from already-built indices.
    #[must_use]
    pub const fn new(indices: Vec<Index>) -> Self {
        Self { indices }
    }

    /// Parses a whitespace-separated list of 1-based indices, requiring at least one.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input is blank (`MissingIndex`)
    /// - Any token fails [`Index::parse`]; no partial list is returned
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let list: Self = Self::parse_optional(input)?;
        if list.is_empty() {
            return Err(DomainError::MissingIndex);
        }
        Ok(list)
    }

    /// Parses a whitespace-separated list of 1-based indices, allowing none.
    ///
    /// # Errors
    ///
    /// Returns an error if any token fails [`Index::parse`].
    pub fn parse_optional(input: &str) -> Result<Self, DomainError> {
        let indices: Vec<Index> = input
            .split_whitespace()
            .map(Index::parse)
            .collect::<Result<Vec<Index>, DomainError>>()?;
        Ok(Self { indices })
    }

    /// Returns the indices in input order.
    #[must_use]
    pub fn as_slice(&self) -> &[Index] {
        &self.indices
    }

    /// Iterates over the indices in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Index> {
        self.indices.iter()
    }

    /// Returns the number of indices, counting repeats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns whether the list holds no index.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl<'a> IntoIterator for &'a IndexList {
    type Item = &'a Index;
    type IntoIter = std::slice::Iter<'a, Index>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter()
    }
}
