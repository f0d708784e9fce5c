//! Rewriting of delete-confirmation links.
//!
//! The confirmation link is pre-rendered by the server with a placeholder id in
//! its last path segment, e.g. `/messages/delete/1/`. Before the dialog opens the
//! segment is replaced with the ids of the current delete target.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::domain::types::ItemId;

static ID_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|/)(\d+(?:-\d+)*)(/?)$").expect("id segment pattern is valid")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("link has no trailing id segment: {0}")]
    MissingIdSegment(String),

    #[error("no ids to put into the link")]
    EmptyTarget,
}

/// Replaces the trailing dash-joined id segment of `url` with `ids`.
///
/// The part of the URL before the segment and an optional trailing `/` are
/// kept as they are.
pub fn rewrite_id_segment(url: &str, ids: &[ItemId]) -> Result<String, LinkError> {
    if ids.is_empty() {
        return Err(LinkError::EmptyTarget);
    }

    let segment = ID_SEGMENT
        .captures(url)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| LinkError::MissingIdSegment(url.to_string()))?;

    Ok(format!(
        "{}{}{}",
        &url[..segment.start()],
        join_ids(ids),
        &url[segment.end()..]
    ))
}

/// Joins ids with `-`, the separator used in id path segments.
pub fn join_ids(ids: &[ItemId]) -> String {
    ids.iter()
        .map(ItemId::to_string)
        .collect::<Vec<_>>()
        .join("-")
}
