use std::iter;

use formdom::element::form;
use formdom::{BasicElement, FieldGroup, GridRow};

use super::columns::{Column, INFO_COLUMN, header_row, info_button};
use crate::model::Job;

const JOB_COLUMNS: [Column; 6] = [
    Column::new("type", "type", 0, true, true),
    Column::new("status", "status", 0, true, true),
    Column::new("progress", "progress", 0, true, true),
    Column::new("owner", "owner", 0, true, true),
    Column::new("namespace", "namespace", 2, true, false),
    Column::new("name", "name", 9, true, false),
];

/// Field set with the read-only job details.
pub fn job_fieldset(job: &Job) -> BasicElement {
    let cells = JOB_COLUMNS
        .iter()
        .map(|column| {
            let input = form::input()
                .attr("id", format!("id_{}", column.id))
                .attr("name", column.id)
                .maybe_attr("value", job.field(column.name))
                .attr("type", "text")
                .attr("readonly", column.readonly);
            column.cell(FieldGroup::new().control(input))
        })
        .chain(iter::once(
            INFO_COLUMN.cell(FieldGroup::new().control(info_button(job.field("description")))),
        ));

    form::fieldset()
        .attr("id", "id_job_fieldset")
        .child(form::legend("Job Details:"))
        .child(header_row(JOB_COLUMNS.iter().chain(iter::once(&INFO_COLUMN))))
        .child(GridRow::new(cells))
}
