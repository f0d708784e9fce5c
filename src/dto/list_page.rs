//! Data exchanged with the host page: render input, user events and state
//! snapshots.

use serde::{Deserialize, Serialize};

use crate::domain::item::ListKind;
use crate::domain::types::{ItemId, ItemIndex};
use crate::pagination::PageIndicator;

/// What the server rendered before the pager starts.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ListPageInput {
    #[serde(default)]
    pub kind: ListKind,
    /// Row ids in display order; the first one is item 1.
    pub ids: Vec<ItemId>,
    /// Pre-rendered confirmation link with a placeholder id segment.
    pub confirm_href: String,
}

/// A discrete user interaction with the list.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ListEvent {
    NextPage,
    PreviousPage,
    ToggleSelection { index: ItemIndex },
    DeleteOne { id: ItemId },
    DeleteSelected,
}

/// Snapshot of everything a list page currently displays.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ListPageState {
    pub indicator: PageIndicator,
    pub visible: Vec<ItemIndex>,
    pub selected: Vec<ItemIndex>,
    pub bulk_delete_enabled: bool,
    pub confirm_href: String,
    pub target_label: Option<String>,
}
