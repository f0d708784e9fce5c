//! DTOs that bridge the pager with the host page.

pub mod list_page;
