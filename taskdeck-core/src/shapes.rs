//! Shape descriptors for the todo resource.
//!
//! Both shapes are built on first use and stay immutable for the life of the
//! process.

use once_cell::sync::Lazy;

use crate::query::shape::{FieldDecl, ShapeDescriptor};

pub const ID_FIELD: &str = "id";
pub const TITLE_FIELD: &str = "title";
pub const COMPLETED_FIELD: &str = "completed";

/// Stored todo record.
pub static TODO_RECORD_SHAPE: Lazy<ShapeDescriptor> = Lazy::new(|| {
    ShapeDescriptor::new(
        "todo_record",
        [
            FieldDecl::read_write(ID_FIELD),
            FieldDecl::read_write(TITLE_FIELD),
            FieldDecl::read_write(COMPLETED_FIELD),
        ],
    )
});

/// Todo as returned to clients.
pub static TODO_SHAPE: Lazy<ShapeDescriptor> = Lazy::new(|| {
    ShapeDescriptor::new(
        "todo",
        [
            FieldDecl::read_write(ID_FIELD),
            FieldDecl::read_write(TITLE_FIELD),
            FieldDecl::read_write(COMPLETED_FIELD),
        ],
    )
});
