//! Sort resolver
//!
//! Combines a parsed [`SortDirective`] with the field inspector and a default
//! sort. Resolution is total: bad input degrades to the default key, but a
//! parsed direction is always kept.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::directive::SortDirective;
use crate::query::inspector::FieldInspector;
use crate::query::shape::ShapeDescriptor;
use crate::query::types::{SortDirection, SortSpec, SortTerm};

/// Sort applied when the request does not name a usable key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultSort {
    pub key: String,
    pub direction: SortDirection,
}

impl DefaultSort {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }
}

/// Final sort decision reported verbatim in response metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSort {
    pub applied_key: String,
    pub applied_direction: SortDirection,
}

impl ResolvedSort {
    /// Store sort spec: the resolved term followed by an ascending tie-break.
    pub fn with_tie_break(&self, tie_break_key: &str) -> SortSpec {
        SortSpec::by(SortTerm {
            key: self.applied_key.clone(),
            direction: self.applied_direction,
        })
        .and(SortTerm::ascending(tie_break_key))
    }
}

/// Validates sort requests against a stored shape and an external shape.
#[derive(Debug, Clone, Copy)]
pub struct SortResolver<'a> {
    inspector: FieldInspector,
    external: &'a ShapeDescriptor,
    storage: &'a ShapeDescriptor,
}

impl<'a> SortResolver<'a> {
    pub fn new(
        inspector: FieldInspector,
        external: &'a ShapeDescriptor,
        storage: &'a ShapeDescriptor,
    ) -> Self {
        Self {
            inspector,
            external,
            storage,
        }
    }

    /// Whether `key` can be sorted on by the store and is visible to clients.
    pub fn accepts(&self, key: &str) -> bool {
        self.inspector.is_sortable(self.storage, key)
            && self.inspector.is_exposed(self.external, key)
    }

    pub fn resolve(
        &self,
        raw_sort: Option<&str>,
        default: &DefaultSort,
    ) -> ResolvedSort {
        let mut applied_key = default.key.clone();
        let mut applied_direction = default.direction;

        if let Some(directive) = SortDirective::parse(raw_sort) {
            applied_direction = directive.direction;

            let candidate = directive.candidate_key;
            if self.accepts(&candidate) {
                applied_key = candidate;
            } else {
                let lowered = candidate.to_lowercase();
                if self.accepts(&lowered) {
                    applied_key = lowered;
                } else {
                    debug!(
                        candidate = %candidate,
                        fallback = %default.key,
                        "sort key rejected, using default key"
                    );
                }
            }
        }

        ResolvedSort {
            applied_key,
            applied_direction,
        }
    }
}
