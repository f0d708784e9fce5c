use thiserror::Error;

use crate::domain::types::ItemIndex;
use crate::links::LinkError;

pub mod list_page;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("no item rendered at index {0}")]
    UnknownItem(ItemIndex),

    #[error("cannot rewrite confirmation link: {0}")]
    Link(#[from] LinkError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
