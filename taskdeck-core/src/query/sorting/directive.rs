//! Raw `sort` parameter parsing
//!
//! Accepted forms are `key`, `+key` and `-key`. Surrounding whitespace is
//! ignored; the key itself is passed on verbatim.

use crate::query::types::SortDirection;

/// Parsed form of one request's `sort` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDirective {
    pub direction: SortDirection,
    pub candidate_key: String,
}

impl SortDirective {
    /// Returns `None` for an absent or blank parameter.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (direction, key) = if let Some(rest) = trimmed.strip_prefix('-') {
            (SortDirection::Descending, rest)
        } else if let Some(rest) = trimmed.strip_prefix('+') {
            (SortDirection::Ascending, rest)
        } else {
            (SortDirection::Ascending, trimmed)
        };

        Some(Self {
            direction,
            candidate_key: key.to_string(),
        })
    }
}
