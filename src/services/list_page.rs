//! Event handling for one rendered list page.

use std::num::NonZeroUsize;

use crate::controller::PaginatedSelectionController;
use crate::domain::delete_target::DeleteTarget;
use crate::domain::types::ItemIndex;
use crate::dto::list_page::{ListEvent, ListPageInput, ListPageState};
use crate::links::rewrite_id_segment;
use crate::services::{ServiceError, ServiceResult};
use crate::view::ListView;

/// A list page: the pager, its confirmation link and the view it draws into.
///
/// Every event runs to completion and leaves the view consistent with the
/// controller.
pub struct ListPage<V: ListView> {
    controller: PaginatedSelectionController,
    confirm_href: String,
    target_label: Option<String>,
    view: V,
}

impl<V: ListView> ListPage<V> {
    /// Builds the pager from the render input and draws the initial state.
    pub fn load(input: ListPageInput, page_size: NonZeroUsize, view: V) -> Self {
        let controller =
            PaginatedSelectionController::initialize_with_page_size(input.kind, input.ids, page_size);
        let mut page = Self {
            controller,
            confirm_href: input.confirm_href,
            target_label: None,
            view,
        };
        page.render_page();
        page
    }

    pub fn controller(&self) -> &PaginatedSelectionController {
        &self.controller
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn handle(&mut self, event: ListEvent) -> ServiceResult<()> {
        match event {
            ListEvent::NextPage => {
                if self.controller.go_to_next_page() {
                    log::debug!(
                        "Moved to page {}",
                        self.controller.page_state().current_page()
                    );
                }
                self.render_page();
            }
            ListEvent::PreviousPage => {
                if self.controller.go_to_previous_page() {
                    log::debug!(
                        "Moved to page {}",
                        self.controller.page_state().current_page()
                    );
                }
                self.render_page();
            }
            ListEvent::ToggleSelection { index } => self.toggle(index)?,
            ListEvent::DeleteOne { id } => {
                let target = self.controller.request_single_delete(id);
                self.point_link_at(&target)?;
            }
            ListEvent::DeleteSelected => {
                if !self.controller.is_bulk_delete_enabled() {
                    log::debug!("Ignoring bulk delete: nothing selected on this page");
                    return Ok(());
                }
                let target = self.controller.request_bulk_delete();
                self.point_link_at(&target)?;
            }
        }
        Ok(())
    }

    pub fn snapshot(&self) -> ListPageState {
        let visible = self
            .controller
            .visible_items()
            .map(|item| item.index)
            .collect();
        let selected = self
            .controller
            .items()
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.index)
            .collect();

        ListPageState {
            indicator: self.controller.page_indicator(),
            visible,
            selected,
            bulk_delete_enabled: self.controller.is_bulk_delete_enabled(),
            confirm_href: self.confirm_href.clone(),
            target_label: self.target_label.clone(),
        }
    }

    fn toggle(&mut self, index: ItemIndex) -> ServiceResult<()> {
        let selected = self
            .controller
            .toggle_item_selection(index)
            .ok_or(ServiceError::UnknownItem(index))?;
        log::debug!("Item {index} selected: {selected}");
        self.view
            .set_bulk_delete_enabled(self.controller.is_bulk_delete_enabled());
        Ok(())
    }

    fn point_link_at(&mut self, target: &DeleteTarget) -> ServiceResult<()> {
        let href = rewrite_id_segment(&self.confirm_href, &target.ids).map_err(|err| {
            log::error!("Failed to rewrite confirmation link: {err}");
            err
        })?;
        let label = target.label(self.controller.kind());

        log::info!("Confirmation link now targets {}", target.joined_ids());

        self.view.set_confirm_href(&href);
        self.view.set_target_label(&label);
        self.confirm_href = href;
        self.target_label = Some(label);
        Ok(())
    }

    fn render_page(&mut self) {
        for (index, visible) in self.controller.visibility() {
            self.view.set_item_visible(index, visible);
        }
        self.view.set_page_indicator(self.controller.page_indicator());
        self.view
            .set_bulk_delete_enabled(self.controller.is_bulk_delete_enabled());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_PAGE_SIZE;
    use crate::domain::item::ListKind;
    use crate::domain::types::ItemId;
    use crate::links::LinkError;
    use crate::view::RecordingView;

    fn input(total: i32, confirm_href: &str) -> ListPageInput {
        ListPageInput {
            kind: ListKind::Messages,
            ids: (1..=total).map(|id| ItemId::new(id).unwrap()).collect(),
            confirm_href: confirm_href.to_string(),
        }
    }

    fn index(value: usize) -> ItemIndex {
        ItemIndex::new(value).unwrap()
    }

    #[test]
    fn bulk_delete_is_ignored_while_disabled() {
        let mut page = ListPage::load(
            input(12, "/messages/delete/1/"),
            DEFAULT_PAGE_SIZE,
            RecordingView::new(),
        );
        page.handle(ListEvent::ToggleSelection { index: index(12) })
            .unwrap();

        page.handle(ListEvent::DeleteSelected).unwrap();

        assert_eq!(page.view().confirm_href, None);
        assert_eq!(page.snapshot().confirm_href, "/messages/delete/1/");
    }

    #[test]
    fn unknown_item_is_reported() {
        let mut page = ListPage::load(
            input(3, "/messages/delete/1/"),
            DEFAULT_PAGE_SIZE,
            RecordingView::new(),
        );
        let result = page.handle(ListEvent::ToggleSelection { index: index(9) });
        assert_eq!(result, Err(ServiceError::UnknownItem(index(9))));
    }

    #[test]
    fn broken_link_keeps_previous_href() {
        let mut page = ListPage::load(
            input(3, "/messages/delete/"),
            DEFAULT_PAGE_SIZE,
            RecordingView::new(),
        );
        let result = page.handle(ListEvent::DeleteOne {
            id: ItemId::new(2).unwrap(),
        });

        assert!(matches!(
            result,
            Err(ServiceError::Link(LinkError::MissingIdSegment(_)))
        ));
        assert_eq!(page.snapshot().confirm_href, "/messages/delete/");
        assert_eq!(page.snapshot().target_label, None);
    }

    #[test]
    fn thread_list_uses_thread_labels() {
        let mut page = ListPage::load(
            ListPageInput {
                kind: ListKind::Threads,
                ..input(4, "/groups/2/thread/1/delete/1/")
            },
            DEFAULT_PAGE_SIZE,
            RecordingView::new(),
        );
        page.handle(ListEvent::DeleteOne {
            id: ItemId::new(3).unwrap(),
        })
        .unwrap();

        assert_eq!(page.view().target_label.as_deref(), Some("this thread"));
        assert_eq!(
            page.view().confirm_href.as_deref(),
            Some("/groups/2/thread/1/delete/3/")
        );
    }
}
