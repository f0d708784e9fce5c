//! Pagination and checkbox selection over a fully rendered list.

use std::num::NonZeroUsize;

use crate::DEFAULT_PAGE_SIZE;
use crate::domain::delete_target::DeleteTarget;
use crate::domain::item::{Item, ListKind};
use crate::domain::types::{ItemId, ItemIndex};
use crate::pagination::{PageIndicator, PageState};

/// Owns the paging state and per-item selection flags of one list page.
///
/// Selection survives navigation; only visibility follows the current page.
#[derive(Clone, Debug)]
pub struct PaginatedSelectionController {
    kind: ListKind,
    state: PageState,
    items: Vec<Item>,
}

impl PaginatedSelectionController {
    /// Builds the controller from ids rendered in display order. The first id
    /// gets index 1.
    pub fn initialize<I>(kind: ListKind, ids: I) -> Self
    where
        I: IntoIterator<Item = ItemId>,
    {
        Self::initialize_with_page_size(kind, ids, DEFAULT_PAGE_SIZE)
    }

    pub fn initialize_with_page_size<I>(kind: ListKind, ids: I, page_size: NonZeroUsize) -> Self
    where
        I: IntoIterator<Item = ItemId>,
    {
        let items: Vec<Item> = ids
            .into_iter()
            .enumerate()
            .map(|(offset, id)| Item::new(ItemIndex::from_offset(offset), id))
            .collect();
        let state = PageState::with_page_size(items.len(), page_size);

        log::debug!(
            "Initialized {:?} pager with {} items over {} pages",
            kind,
            state.total(),
            state.total_pages()
        );

        Self { kind, state, items }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn page_state(&self) -> &PageState {
        &self.state
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn page_indicator(&self) -> PageIndicator {
        self.state.indicator()
    }

    /// Returns whether the page changed.
    pub fn go_to_next_page(&mut self) -> bool {
        self.state.next()
    }

    /// Returns whether the page changed.
    pub fn go_to_previous_page(&mut self) -> bool {
        self.state.previous()
    }

    pub fn is_visible(&self, index: ItemIndex) -> bool {
        self.state.is_visible(index)
    }

    /// Visibility of every item, in index order.
    pub fn visibility(&self) -> impl Iterator<Item = (ItemIndex, bool)> + '_ {
        self.items
            .iter()
            .map(|item| (item.index, self.state.is_visible(item.index)))
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items
            .iter()
            .filter(|item| self.state.is_visible(item.index))
    }

    /// Flips the selection of the item at `index`.
    ///
    /// Returns the new flag, or `None` if no such item was rendered.
    pub fn toggle_item_selection(&mut self, index: ItemIndex) -> Option<bool> {
        let item = self.items.get_mut(index.get() - 1)?;
        item.selected = !item.selected;
        Some(item.selected)
    }

    /// Target for a row's own delete control. Checkbox state is ignored.
    pub fn request_single_delete(&self, id: ItemId) -> DeleteTarget {
        DeleteTarget::single(id)
    }

    /// Selected items on the current page, by ascending index.
    pub fn request_bulk_delete(&self) -> DeleteTarget {
        let ids = self
            .visible_items()
            .filter(|item| item.selected)
            .map(|item| item.id)
            .collect();
        DeleteTarget::bulk(ids)
    }

    pub fn is_bulk_delete_enabled(&self) -> bool {
        self.visible_items().any(|item| item.selected)
    }

    /// Every selected id, including those on other pages.
    pub fn selected_ids(&self) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::delete_target::TargetOrigin;

    fn controller(total: i32) -> PaginatedSelectionController {
        let ids = (1..=total).map(|id| ItemId::new(id * 100).unwrap());
        PaginatedSelectionController::initialize(ListKind::Messages, ids)
    }

    fn index(value: usize) -> ItemIndex {
        ItemIndex::new(value).unwrap()
    }

    #[test]
    fn initialize_assigns_indices_in_render_order() {
        let pager = controller(3);
        let indices: Vec<usize> = pager.items().iter().map(|i| i.index.get()).collect();
        let ids: Vec<i32> = pager.items().iter().map(|i| i.id.get()).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(ids, vec![100, 200, 300]);
        assert!(pager.items().iter().all(|i| !i.selected));
        assert_eq!(pager.page_state().current_page(), 1);
    }

    #[test]
    fn toggle_flips_flag_and_reports_unknown_items() {
        let mut pager = controller(3);
        assert_eq!(pager.toggle_item_selection(index(2)), Some(true));
        assert_eq!(pager.toggle_item_selection(index(2)), Some(false));
        assert_eq!(pager.toggle_item_selection(index(4)), None);
    }

    #[test]
    fn toggle_does_not_move_page() {
        let mut pager = controller(25);
        pager.go_to_next_page();
        pager.toggle_item_selection(index(3));
        assert_eq!(pager.page_state().current_page(), 2);
    }

    #[test]
    fn bulk_target_is_ordered_by_index() {
        let mut pager = controller(10);
        pager.toggle_item_selection(index(9));
        pager.toggle_item_selection(index(3));
        pager.toggle_item_selection(index(5));
        let target = pager.request_bulk_delete();
        assert_eq!(target.origin, TargetOrigin::Bulk);
        assert_eq!(target.joined_ids(), "300-500-900");
    }

    #[test]
    fn selected_ids_span_all_pages() {
        let mut pager = controller(25);
        pager.toggle_item_selection(index(2));
        pager.toggle_item_selection(index(22));
        assert_eq!(pager.request_bulk_delete().ids.len(), 1);
        assert_eq!(pager.selected_ids().len(), 2);
    }
}
