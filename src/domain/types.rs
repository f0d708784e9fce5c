//! Strongly-typed value objects used by list items.
//!
//! Identifiers and positions arrive from the host page's render output; once
//! wrapped here they are treated as trusted by the controller.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Item positions are 1-based.
    #[error("index must be greater than zero")]
    ZeroIndex,
}

/// Opaque identifier of one rendered row, used to build deletion URLs.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i32", into = "i32")]
pub struct ItemId(i32);

impl ItemId {
    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId)
        }
    }

    /// Returns the raw `i32` backing this identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for ItemId {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for i32 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

/// 1-based position of an item among all rendered items.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "usize", into = "usize")]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// Creates a position, rejecting zero.
    pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::ZeroIndex)
        }
    }

    /// Position of the element at 0-based `offset`.
    pub const fn from_offset(offset: usize) -> Self {
        Self(offset + 1)
    }

    /// Returns the raw 1-based position.
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Display for ItemIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for ItemIndex {
    type Error = TypeConstraintError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemIndex> for usize {
    fn from(value: ItemIndex) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_rejects_non_positive_values() {
        assert_eq!(ItemId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ItemId::new(-4), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ItemId::new(17).map(ItemId::get), Ok(17));
    }

    #[test]
    fn item_index_is_one_based() {
        assert_eq!(ItemIndex::new(0), Err(TypeConstraintError::ZeroIndex));
        assert_eq!(ItemIndex::new(1).map(ItemIndex::get), Ok(1));
    }

    #[test]
    fn item_id_deserialization_enforces_constraint() {
        let parsed: ItemId = serde_json::from_str("12").unwrap();
        assert_eq!(parsed.get(), 12);
        assert!(serde_json::from_str::<ItemId>("0").is_err());
    }
}
