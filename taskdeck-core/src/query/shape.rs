//! Static shape descriptors
//!
//! A shape is the declared field list of one record representation together
//! with each field's accessibility and "hidden" markers. Shapes are built once
//! from a declarative list and never change afterwards, so every lookup is a
//! plain map probe.

use std::collections::HashMap;

/// Markers that suppress a field from the external representation.
///
/// Any one of them hides the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HiddenMarkers {
    /// Marked hidden on the field declaration itself
    pub declaration: bool,
    /// Marked hidden on the read accessor
    pub read_accessor: bool,
    /// Marked hidden on the write accessor
    pub write_accessor: bool,
}

impl HiddenMarkers {
    pub const NONE: Self = Self {
        declaration: false,
        read_accessor: false,
        write_accessor: false,
    };

    pub const fn any(&self) -> bool {
        self.declaration || self.read_accessor || self.write_accessor
    }
}

/// Declaration of a single field on a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: &'static str,
    pub readable: bool,
    pub writable: bool,
    pub hidden: HiddenMarkers,
}

impl FieldDecl {
    /// Field with both read and write access.
    pub const fn read_write(name: &'static str) -> Self {
        Self {
            name,
            readable: true,
            writable: true,
            hidden: HiddenMarkers::NONE,
        }
    }

    pub const fn read_only(name: &'static str) -> Self {
        Self {
            name,
            readable: true,
            writable: false,
            hidden: HiddenMarkers::NONE,
        }
    }

    pub const fn write_only(name: &'static str) -> Self {
        Self {
            name,
            readable: false,
            writable: true,
            hidden: HiddenMarkers::NONE,
        }
    }

    /// Backing storage only; no accessor in either direction.
    pub const fn inaccessible(name: &'static str) -> Self {
        Self {
            name,
            readable: false,
            writable: false,
            hidden: HiddenMarkers::NONE,
        }
    }

    pub const fn hidden(mut self) -> Self {
        self.hidden.declaration = true;
        self
    }

    pub const fn hidden_on_read(mut self) -> Self {
        self.hidden.read_accessor = true;
        self
    }

    pub const fn hidden_on_write(mut self) -> Self {
        self.hidden.write_accessor = true;
        self
    }

    pub const fn is_accessible(&self) -> bool {
        self.readable || self.writable
    }
}

/// Immutable field set for one record representation.
#[derive(Debug, Clone)]
pub struct ShapeDescriptor {
    name: &'static str,
    fields: Vec<FieldDecl>,
    by_name: HashMap<&'static str, usize>,
}

impl ShapeDescriptor {
    /// Builds a shape from its field declarations.
    ///
    /// A later declaration with a duplicate name replaces the earlier one in
    /// lookups.
    pub fn new(
        name: &'static str,
        fields: impl IntoIterator<Item = FieldDecl>,
    ) -> Self {
        let fields: Vec<FieldDecl> = fields.into_iter().collect();
        let by_name = fields
            .iter()
            .enumerate()
            .map(|(idx, field)| (field.name, idx))
            .collect();
        Self {
            name,
            fields,
            by_name,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Exact, case-sensitive lookup.
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.by_name.get(name).map(|&idx| &self.fields[idx])
    }

    pub fn fields(&self) -> &[FieldDecl] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_sensitive() {
        let shape = ShapeDescriptor::new(
            "sample",
            [FieldDecl::read_write("title"), FieldDecl::read_only("id")],
        );

        assert!(shape.field("title").is_some());
        assert!(shape.field("Title").is_none());
        assert_eq!(shape.fields().len(), 2);
        assert_eq!(shape.name(), "sample");
    }

    #[test]
    fn marker_builders_compose() {
        let decl = FieldDecl::read_write("secret").hidden_on_write();
        assert!(decl.hidden.write_accessor);
        assert!(!decl.hidden.declaration);
        assert!(decl.hidden.any());
        assert!(!FieldDecl::inaccessible("raw").is_accessible());
    }
}
