use std::num::NonZeroU8;

use crate::dom::DomElement;
use crate::element::{Node, Renderable};

const COLUMN: &str = "col-lg";
const HIDDEN: &str = "hidden";
const ROW: &str = "row";
const HEADER: &str = "title";

/// One cell of a grid row, with a relative width out of 12.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridCell {
    pub content: Option<Box<Node>>,
    /// `None` renders the unnumbered full-width class.
    pub width: Option<NonZeroU8>,
    pub hidden: bool,
}

impl GridCell {
    pub fn new(content: impl Into<Node>) -> Self {
        Self {
            content: Some(Box::new(content.into())),
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the width weight. A weight of `0` leaves the width unset.
    pub fn width(mut self, weight: u8) -> Self {
        self.width = NonZeroU8::new(weight);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn width_class(&self) -> String {
        match self.width {
            Some(weight) => format!("{COLUMN}-{weight}"),
            None => COLUMN.to_string(),
        }
    }
}

impl Renderable for GridCell {
    fn render(&self) -> DomElement {
        let mut cell = DomElement::new("div");
        cell.set_attr("class", self.width_class());
        if self.hidden {
            cell.add_class(HIDDEN);
        }
        if let Some(content) = &self.content {
            cell.append(content.render());
        }
        cell
    }
}

/// A line of grid cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridRow {
    pub cells: Vec<GridCell>,
    /// Header rows get the `title` class on the row itself.
    pub header: bool,
}

impl GridRow {
    pub fn new(cells: impl IntoIterator<Item = GridCell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            header: false,
        }
    }

    pub fn cell(mut self, cell: GridCell) -> Self {
        self.cells.push(cell);
        self
    }

    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl Renderable for GridRow {
    fn render(&self) -> DomElement {
        let mut row = DomElement::new("div");
        row.set_attr("class", ROW);
        if self.header {
            row.add_class(HEADER);
        }
        for cell in &self.cells {
            row.append(cell.render());
        }
        row
    }
}
