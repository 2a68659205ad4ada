use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "ASC")]
    Ascending,
    #[serde(rename = "DESC")]
    Descending,
}

impl SortDirection {
    /// Wire form reported back to clients.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }

    pub const fn is_descending(self) -> bool {
        matches!(self, SortDirection::Descending)
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(key, direction)` order-by term handed to the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortTerm {
    pub key: String,
    pub direction: SortDirection,
}

impl SortTerm {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Ordered sequence of sort terms; earlier terms take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    terms: Vec<SortTerm>,
}

impl SortSpec {
    pub fn by(term: SortTerm) -> Self {
        Self { terms: vec![term] }
    }

    /// Appends a lower-precedence term.
    pub fn and(mut self, term: SortTerm) -> Self {
        self.terms.push(term);
        self
    }

    pub fn terms(&self) -> &[SortTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SortTerm> {
        self.terms.iter()
    }
}

impl<'a> IntoIterator for &'a SortSpec {
    type Item = &'a SortTerm;
    type IntoIter = std::slice::Iter<'a, SortTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_wire_names() {
        assert_eq!(SortDirection::Ascending.as_str(), "ASC");
        assert_eq!(SortDirection::Descending.to_string(), "DESC");
        assert_eq!(
            serde_json::to_string(&SortDirection::Descending).unwrap(),
            "\"DESC\""
        );
    }

    #[test]
    fn sort_spec_keeps_term_order() {
        let spec = SortSpec::by(SortTerm::descending("completed"))
            .and(SortTerm::ascending("id"));

        let keys: Vec<_> = spec.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, ["completed", "id"]);
        assert_eq!(spec.len(), 2);
    }
}
