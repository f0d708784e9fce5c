//! Parsing of the id segment a delete-confirmation link carries.

use crate::domain::types::ItemId;
use crate::forms::FormError;

/// Ids named by a `3-5-9` style path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteIdsPath {
    pub ids: Vec<ItemId>,
}

impl DeleteIdsPath {
    /// Parses a dash-joined segment, keeping first-seen order and dropping repeats.
    pub fn parse(segment: &str) -> Result<Self, FormError> {
        let segment = segment.trim().trim_end_matches('/');
        let mut ids: Vec<ItemId> = Vec::new();

        for part in segment.split('-') {
            let id = part
                .parse::<i32>()
                .ok()
                .and_then(|raw| ItemId::new(raw).ok())
                .ok_or_else(|| FormError::InvalidIdSegment(segment.to_string()))?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        Ok(Self { ids })
    }
}

impl TryFrom<&str> for DeleteIdsPath {
    type Error = FormError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(path: &DeleteIdsPath) -> Vec<i32> {
        path.ids.iter().map(|id| id.get()).collect()
    }

    #[test]
    fn parses_single_and_joined_segments() {
        assert_eq!(raw(&DeleteIdsPath::parse("17").unwrap()), vec![17]);
        assert_eq!(raw(&DeleteIdsPath::parse("3-5-9/").unwrap()), vec![3, 5, 9]);
    }

    #[test]
    fn drops_repeated_ids() {
        assert_eq!(raw(&DeleteIdsPath::parse("5-3-5").unwrap()), vec![5, 3]);
    }

    #[test]
    fn rejects_malformed_segments() {
        for bad in ["", "3--5", "-3", "3-x", "0", "3-0"] {
            assert!(
                matches!(
                    DeleteIdsPath::parse(bad),
                    Err(FormError::InvalidIdSegment(_))
                ),
                "segment {bad:?}"
            );
        }
    }
}
