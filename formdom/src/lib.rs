pub mod controls;
pub mod dom;
pub mod element;
pub mod error;

pub use controls::{merge_class, FieldGroup, GridCell, GridRow};
pub use dom::{DomElement, DomNode};
pub use element::{AttrValue, Attributes, BasicElement, ElementFamily, Node, Renderable};
pub use error::ElementError;
