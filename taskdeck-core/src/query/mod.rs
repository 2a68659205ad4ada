pub mod inspector;
pub mod list;
pub mod pagination;
pub mod shape;
pub mod sorting;
pub mod types;

pub use inspector::{FieldCapability, FieldInspector, SortableAccess};
pub use list::{ListMetadata, ListOutcome, ListPlan, ListQueryEngine, ListRequest};
pub use pagination::PageRequest;
pub use shape::{FieldDecl, HiddenMarkers, ShapeDescriptor};
pub use sorting::*;
pub use types::*;
