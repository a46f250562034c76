use super::{BasicElement, Renderable};
use crate::controls::{FieldGroup, GridCell, GridRow};
use crate::dom::DomElement;

/// Any node of an element tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(BasicElement),
    FieldGroup(FieldGroup),
    GridCell(GridCell),
    GridRow(GridRow),
}

impl Renderable for Node {
    fn render(&self) -> DomElement {
        match self {
            Self::Element(element) => element.render(),
            Self::FieldGroup(group) => group.render(),
            Self::GridCell(cell) => cell.render(),
            Self::GridRow(row) => row.render(),
        }
    }
}

impl From<BasicElement> for Node {
    fn from(element: BasicElement) -> Self {
        Self::Element(element)
    }
}

impl From<FieldGroup> for Node {
    fn from(group: FieldGroup) -> Self {
        Self::FieldGroup(group)
    }
}

impl From<GridCell> for Node {
    fn from(cell: GridCell) -> Self {
        Self::GridCell(cell)
    }
}

impl From<GridRow> for Node {
    fn from(row: GridRow) -> Self {
        Self::GridRow(row)
    }
}
