//! Output seam between the pager and whatever draws the list.

use std::collections::BTreeMap;

use crate::domain::types::ItemIndex;
use crate::pagination::PageIndicator;

#[cfg(feature = "test-mocks")]
pub mod mock;

/// Presentation updates produced by a list page.
pub trait ListView {
    fn set_item_visible(&mut self, index: ItemIndex, visible: bool);
    fn set_page_indicator(&mut self, indicator: PageIndicator);
    fn set_bulk_delete_enabled(&mut self, enabled: bool);
    fn set_confirm_href(&mut self, href: &str);
    fn set_target_label(&mut self, label: &str);
}

/// In-memory view keeping the latest value of every output.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub visible: BTreeMap<ItemIndex, bool>,
    pub indicator: Option<PageIndicator>,
    pub bulk_delete_enabled: bool,
    pub confirm_href: Option<String>,
    pub target_label: Option<String>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices currently shown, ascending.
    pub fn visible_indices(&self) -> Vec<ItemIndex> {
        self.visible
            .iter()
            .filter(|(_, shown)| **shown)
            .map(|(index, _)| *index)
            .collect()
    }
}

impl ListView for RecordingView {
    fn set_item_visible(&mut self, index: ItemIndex, visible: bool) {
        self.visible.insert(index, visible);
    }

    fn set_page_indicator(&mut self, indicator: PageIndicator) {
        self.indicator = Some(indicator);
    }

    fn set_bulk_delete_enabled(&mut self, enabled: bool) {
        self.bulk_delete_enabled = enabled;
    }

    fn set_confirm_href(&mut self, href: &str) {
        self.confirm_href = Some(href.to_string());
    }

    fn set_target_label(&mut self, label: &str) {
        self.target_label = Some(label.to_string());
    }
}
