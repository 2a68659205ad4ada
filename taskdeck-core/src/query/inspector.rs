//! Field capability inspection
//!
//! Answers two questions about a field on a [`ShapeDescriptor`]:
//! can the store order by it, and is it visible to clients. Unknown or blank
//! names always answer `false`.

use serde::{Deserialize, Serialize};

use super::shape::{FieldDecl, ShapeDescriptor};

/// Which accessor makes a stored field usable as an order-by term.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortableAccess {
    /// The field must have a read accessor.
    #[default]
    Readable,
    /// The field must have a write accessor.
    Writable,
}

impl SortableAccess {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "read" | "readable" => Some(SortableAccess::Readable),
            "write" | "writable" => Some(SortableAccess::Writable),
            _ => None,
        }
    }

    const fn permits(self, decl: &FieldDecl) -> bool {
        match self {
            SortableAccess::Readable => decl.readable,
            SortableAccess::Writable => decl.writable,
        }
    }
}

/// Derived view of a single field. Computed per lookup, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCapability {
    pub name: String,
    pub sortable: bool,
    pub exposed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldInspector {
    access: SortableAccess,
}

impl FieldInspector {
    pub const fn new(access: SortableAccess) -> Self {
        Self { access }
    }

    pub const fn access(&self) -> SortableAccess {
        self.access
    }

    pub fn is_sortable(&self, shape: &ShapeDescriptor, field: &str) -> bool {
        lookup(shape, field).is_some_and(|decl| self.access.permits(decl))
    }

    pub fn is_exposed(&self, shape: &ShapeDescriptor, field: &str) -> bool {
        lookup(shape, field)
            .is_some_and(|decl| decl.is_accessible() && !decl.hidden.any())
    }

    pub fn capability(
        &self,
        shape: &ShapeDescriptor,
        field: &str,
    ) -> Option<FieldCapability> {
        lookup(shape, field)?;
        Some(FieldCapability {
            name: field.to_string(),
            sortable: self.is_sortable(shape, field),
            exposed: self.is_exposed(shape, field),
        })
    }

    /// Capabilities for every declared field, in declaration order.
    pub fn capabilities(&self, shape: &ShapeDescriptor) -> Vec<FieldCapability> {
        shape
            .fields()
            .iter()
            .filter_map(|decl| self.capability(shape, decl.name))
            .collect()
    }
}

fn lookup<'a>(shape: &'a ShapeDescriptor, field: &str) -> Option<&'a FieldDecl> {
    if field.trim().is_empty() {
        return None;
    }
    shape.field(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::shape::FieldDecl;

    fn entity_shape() -> ShapeDescriptor {
        ShapeDescriptor::new(
            "test_entity",
            [
                FieldDecl::read_only("fallback"),
                FieldDecl::read_only("title"),
                FieldDecl::read_only("secret"),
                FieldDecl::read_write("editable"),
                FieldDecl::write_only("password"),
            ],
        )
    }

    fn dto_shape() -> ShapeDescriptor {
        ShapeDescriptor::new(
            "test_dto",
            [
                FieldDecl::read_only("fallback"),
                FieldDecl::read_only("title"),
                FieldDecl::read_write("editable"),
                FieldDecl::read_write("internal").hidden(),
                FieldDecl::read_write("audit").hidden_on_read(),
                FieldDecl::read_write("token").hidden_on_write(),
                FieldDecl::inaccessible("backing"),
            ],
        )
    }

    #[test]
    fn blank_and_unknown_fields_are_neither_sortable_nor_exposed() {
        let inspector = FieldInspector::default();
        let shape = entity_shape();

        for name in ["", "   ", "missing", "Title"] {
            assert!(!inspector.is_sortable(&shape, name), "{name:?}");
            assert!(!inspector.is_exposed(&shape, name), "{name:?}");
            assert!(inspector.capability(&shape, name).is_none());
        }
    }

    #[test]
    fn readable_contract_accepts_read_only_fields() {
        let inspector = FieldInspector::new(SortableAccess::Readable);
        let shape = entity_shape();

        assert!(inspector.is_sortable(&shape, "title"));
        assert!(inspector.is_sortable(&shape, "editable"));
        assert!(!inspector.is_sortable(&shape, "password"));
    }

    #[test]
    fn writable_contract_rejects_read_only_fields() {
        let inspector = FieldInspector::new(SortableAccess::Writable);
        let shape = entity_shape();

        assert!(!inspector.is_sortable(&shape, "title"));
        assert!(inspector.is_sortable(&shape, "editable"));
        assert!(inspector.is_sortable(&shape, "password"));
    }

    #[test]
    fn any_hidden_marker_hides_the_field() {
        let inspector = FieldInspector::default();
        let shape = dto_shape();

        assert!(inspector.is_exposed(&shape, "title"));
        assert!(inspector.is_exposed(&shape, "editable"));
        assert!(!inspector.is_exposed(&shape, "internal"));
        assert!(!inspector.is_exposed(&shape, "audit"));
        assert!(!inspector.is_exposed(&shape, "token"));
    }

    #[test]
    fn inaccessible_field_is_not_exposed() {
        let inspector = FieldInspector::default();
        assert!(!inspector.is_exposed(&dto_shape(), "backing"));
    }

    #[test]
    fn capabilities_follow_declaration_order() {
        let inspector = FieldInspector::default();
        let caps = inspector.capabilities(&dto_shape());

        assert_eq!(caps[0].name, "fallback");
        assert_eq!(caps.len(), 7);
        let internal = caps.iter().find(|c| c.name == "internal").unwrap();
        assert!(internal.sortable);
        assert!(!internal.exposed);
    }

    #[test]
    fn parses_access_names() {
        assert_eq!(SortableAccess::parse("READ"), Some(SortableAccess::Readable));
        assert_eq!(
            SortableAccess::parse(" writable "),
            Some(SortableAccess::Writable)
        );
        assert_eq!(SortableAccess::parse("both"), None);
    }
}
