//! Mock view for asserting exact presentation updates in tests.

use mockall::mock;

use crate::domain::types::ItemIndex;
use crate::pagination::PageIndicator;
use crate::view::ListView;

mock! {
    pub View {}

    impl ListView for View {
        fn set_item_visible(&mut self, index: ItemIndex, visible: bool);
        fn set_page_indicator(&mut self, indicator: PageIndicator);
        fn set_bulk_delete_enabled(&mut self, enabled: bool);
        fn set_confirm_href(&mut self, href: &str);
        fn set_target_label(&mut self, label: &str);
    }
}
