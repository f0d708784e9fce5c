//! Resolved set of ids a pending delete action acts on.

use serde::Serialize;

use crate::domain::item::ListKind;
use crate::domain::types::ItemId;
use crate::links::join_ids;

/// How a delete target was chosen.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TargetOrigin {
    /// One row's own delete control, independent of checkboxes.
    Single,
    /// The "delete all selected" trigger.
    Bulk,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct DeleteTarget {
    pub ids: Vec<ItemId>,
    pub origin: TargetOrigin,
}

impl DeleteTarget {
    pub fn single(id: ItemId) -> Self {
        Self {
            ids: vec![id],
            origin: TargetOrigin::Single,
        }
    }

    /// Bulk target; `ids` must already be ordered by ascending index.
    pub fn bulk(ids: Vec<ItemId>) -> Self {
        Self {
            ids,
            origin: TargetOrigin::Bulk,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids joined with `-`, the form used in confirmation URLs.
    pub fn joined_ids(&self) -> String {
        join_ids(&self.ids)
    }

    /// Text shown in the confirmation dialog's pluralization placeholder.
    pub fn label(&self, kind: ListKind) -> String {
        match self.origin {
            TargetOrigin::Single => format!("this {}", kind.noun()),
            TargetOrigin::Bulk if self.ids.len() == 1 => format!("the selected {}", kind.noun()),
            TargetOrigin::Bulk => format!("the selected {}", kind.plural_noun()),
        }
    }
}
