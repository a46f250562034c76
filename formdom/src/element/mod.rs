mod basic;
pub mod form;
mod node;
mod value;

pub use basic::{Attributes, BasicElement, ElementFamily};
pub use node::Node;
pub use value::AttrValue;

use crate::dom::DomElement;

/// Anything that can be turned into a live element.
///
/// Every call builds a fresh subtree; nothing is cached between renders.
pub trait Renderable {
    fn render(&self) -> DomElement;
}

/// Find an element node by its `id` attribute.
///
/// Composite controls are searched through the nodes they hold.
pub fn find_node<'a>(root: &'a Node, id: &str) -> Option<&'a BasicElement> {
    match root {
        Node::Element(element) => find_in_element(element, id),
        Node::FieldGroup(group) => group
            .label
            .iter()
            .chain(group.control.iter())
            .find_map(|element| find_in_element(element, id)),
        Node::GridCell(cell) => cell.content.as_deref().and_then(|node| find_node(node, id)),
        Node::GridRow(row) => row
            .cells
            .iter()
            .find_map(|cell| cell.content.as_deref().and_then(|node| find_node(node, id))),
    }
}

fn find_in_element<'a>(element: &'a BasicElement, id: &str) -> Option<&'a BasicElement> {
    if element.id() == Some(id) {
        return Some(element);
    }
    element
        .child_nodes()
        .iter()
        .find_map(|child| find_node(child, id))
}
