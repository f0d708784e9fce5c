use serde::{Deserialize, Serialize};

use crate::domain::types::{ItemId, ItemIndex};

/// Host page a list is rendered on. Decides the noun used in delete labels.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    #[default]
    Messages,
    Threads,
}

impl ListKind {
    /// Singular noun for one row of this list.
    pub const fn noun(self) -> &'static str {
        match self {
            ListKind::Messages => "message",
            ListKind::Threads => "thread",
        }
    }

    /// Plural noun for several rows of this list.
    pub const fn plural_noun(self) -> &'static str {
        match self {
            ListKind::Messages => "messages",
            ListKind::Threads => "threads",
        }
    }
}

/// One rendered row.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Item {
    pub index: ItemIndex,
    pub id: ItemId,
    pub selected: bool,
}

impl Item {
    /// Creates an unselected row at the given position.
    pub fn new(index: ItemIndex, id: ItemId) -> Self {
        Self {
            index,
            id,
            selected: false,
        }
    }
}
