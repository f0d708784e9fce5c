//! Domain values shared by the pager, the view seam and the DTOs.

pub mod delete_target;
pub mod item;
pub mod types;
