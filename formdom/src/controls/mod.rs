//! Structural controls computed from the data they hold.

mod class;
mod field_group;
mod grid;

pub use class::merge_class;
pub use field_group::FieldGroup;
pub use grid::{GridCell, GridRow};
