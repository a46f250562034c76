use std::iter;

use formdom::element::form;
use formdom::{BasicElement, FieldGroup, GridRow};
use log::debug;
use serde::Deserialize;
use serde::Serialize;

use super::columns::{Column, INFO_COLUMN, header_row, info_button};
use crate::model::JobParameter;

/// Prefix of every parameter input name.
const PREFIX: &str = "parameters";

/// Column edited by the user; carries the validation errors.
const VALUE_COLUMN: &str = "value-str";

const PARAM_COLUMNS: [Column; 6] = [
    Column::new("id", "id", 0, true, true),
    Column::new("type", "type", 0, true, true),
    Column::new("value", "value", 0, true, true),
    Column::new("name", "name", 3, true, false),
    Column::new("type-str", "type", 2, true, false),
    Column::new(VALUE_COLUMN, "value", 6, false, false),
];

/// Bounds announced by the parameter formset's management inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsetLimits {
    pub initial: u32,
    pub min: u32,
    pub max: u32,
}

impl Default for FormsetLimits {
    fn default() -> Self {
        Self {
            initial: 0,
            min: 0,
            max: 1000,
        }
    }
}

/// Field set with one editable row per job parameter.
pub fn job_params_fieldset(params: &[JobParameter], limits: FormsetLimits) -> BasicElement {
    debug!("Building parameter field set for {} parameters", params.len());

    let mut fieldset = form::fieldset()
        .attr("id", "id_job_parameters_fieldset")
        .child(form::legend("Job Parameters:"))
        .child(management_input("TOTAL_FORMS", params.len()))
        .child(management_input("INITIAL_FORMS", limits.initial))
        .child(management_input("MIN_NUM_FORMS", limits.min))
        .child(management_input("MAX_NUM_FORMS", limits.max))
        .child(header_row(PARAM_COLUMNS.iter().chain(iter::once(&INFO_COLUMN))));

    for (index, param) in params.iter().enumerate() {
        fieldset.push_child(param_row(index, param));
    }

    fieldset
}

fn management_input(key: &str, value: impl ToString) -> BasicElement {
    form::input()
        .attr("id", format!("id_{PREFIX}-{key}"))
        .attr("name", format!("{PREFIX}-{key}"))
        .attr("type", "hidden")
        .attr("value", value.to_string())
}

fn param_row(index: usize, param: &JobParameter) -> GridRow {
    let cells = PARAM_COLUMNS
        .iter()
        .map(|column| {
            let control = if column.id == VALUE_COLUMN && param.is_boolean() {
                checkbox_input(index, column, param)
            } else {
                text_input(index, column, param)
            };
            let help = if column.id == VALUE_COLUMN {
                param.error_message()
            } else {
                String::new()
            };
            column.cell(FieldGroup::new().control(control).help(help))
        })
        .chain(iter::once(INFO_COLUMN.cell(
            FieldGroup::new().control(info_button(param.field("description"))),
        )));

    GridRow::new(cells)
}

fn input_id(index: usize, field: &str) -> String {
    format!("id_{PREFIX}-{index}-{field}")
}

fn input_name(index: usize, field: &str) -> String {
    format!("{PREFIX}-{index}-{field}")
}

/// Script copying a visible control's state into the hidden input of the
/// same field.
fn mirror_script(index: usize, column: &Column, source: &str) -> String {
    if column.hidden {
        return String::new();
    }
    format!(
        "$('#{}').attr('value', {source});",
        input_id(index, column.name)
    )
}

fn text_input(index: usize, column: &Column, param: &JobParameter) -> BasicElement {
    form::input()
        .attr("id", input_id(index, column.id))
        .attr("name", input_name(index, column.id))
        .maybe_attr("value", param.field(column.id))
        .attr("type", "text")
        .attr("readonly", column.readonly)
        .attr("onchange", mirror_script(index, column, "$(this).val()"))
}

fn checkbox_input(index: usize, column: &Column, param: &JobParameter) -> BasicElement {
    form::input()
        .attr("id", input_id(index, column.id))
        .attr("class", "pull-left")
        .attr("name", input_name(index, column.id))
        .attr("type", "checkbox")
        .attr("readonly", column.readonly)
        .attr(
            "onchange",
            mirror_script(index, column, "$(this).is(':checked').toString()"),
        )
        .attr("style", "width: auto;")
        .attr("checked", param.is_checked())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_script_targets_hidden_field() {
        let column = &PARAM_COLUMNS[5];
        assert_eq!(
            mirror_script(2, column, "$(this).val()"),
            "$('#id_parameters-2-value').attr('value', $(this).val());"
        );
    }

    #[test]
    fn test_hidden_columns_have_no_script() {
        let column = &PARAM_COLUMNS[0];
        assert_eq!(mirror_script(0, column, "$(this).val()"), "");
    }

    #[test]
    fn test_default_limits() {
        assert_eq!(
            FormsetLimits::default(),
            FormsetLimits {
                initial: 0,
                min: 0,
                max: 1000
            }
        );
    }
}
