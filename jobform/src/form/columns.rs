//! Column layout shared by the job and parameter field sets.

use formdom::element::form;
use formdom::{AttrValue, BasicElement, FieldGroup, GridCell, GridRow};

/// Label of the trailing info column.
pub(super) const INFO_LABEL: &str = "&nbsp;";

/// Trailing column holding the description tooltip.
pub(super) const INFO_COLUMN: Column = Column::new("", INFO_LABEL, 1, true, false);

const INFO_ICON: &str = r#"<span class="glyphicon glyphicon-info-sign icon-info"></span>"#;

/// One column of a record row.
pub(super) struct Column {
    /// Suffix of the input id and name.
    pub id: &'static str,
    /// Record field shown in the column, also the header text.
    pub name: &'static str,
    pub width: u8,
    pub readonly: bool,
    pub hidden: bool,
}

impl Column {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        width: u8,
        readonly: bool,
        hidden: bool,
    ) -> Self {
        Self {
            id,
            name,
            width,
            readonly,
            hidden,
        }
    }

    /// Wrap a control in a cell sized for this column.
    pub fn cell(&self, group: FieldGroup) -> GridCell {
        GridCell::new(group).width(self.width).hidden(self.hidden)
    }
}

/// A row of capitalized column labels.
pub(super) fn header_row<'a>(columns: impl IntoIterator<Item = &'a Column>) -> GridRow {
    GridRow::new(columns.into_iter().map(|column| {
        column.cell(
            FieldGroup::new()
                .label(form::label(column.name).attr("style", "text-transform: capitalize;")),
        )
    }))
}

/// Tooltip button showing a record description.
pub(super) fn info_button<V: Into<AttrValue>>(description: Option<V>) -> BasicElement {
    form::button(INFO_ICON)
        .attr("class", "btn btn-link no-form-control")
        .attr("data-toggle", "tooltip")
        .attr("data-container", "body")
        .attr("data-placement", "right")
        .maybe_attr("data-title", description)
        .attr("type", "button")
        .attr("style", "width: auto; border-color: white; color: #337ab7;")
}
