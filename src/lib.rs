//! Client-side paging and bulk-delete selection for server-rendered lists.
//!
//! The host page renders every row up front. [`controller`] decides which rows
//! are visible and which ones a delete action targets, [`services::list_page`]
//! turns user events into [`view::ListView`] updates.

use std::num::NonZeroUsize;

pub mod controller;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod links;
pub mod models;
pub mod pagination;
pub mod services;
pub mod view;

/// Rows shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};
