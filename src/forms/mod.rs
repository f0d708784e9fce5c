//! Parsers for values the host page sends back to the server.

use thiserror::Error;

pub mod delete;

#[derive(Debug, Error)]
/// Errors that can occur when processing submitted values.
pub enum FormError {
    #[error("invalid id segment: {0:?}")]
    InvalidIdSegment(String),
}
