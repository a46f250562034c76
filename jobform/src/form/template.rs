use formdom::element::form;
use formdom::{BasicElement, FieldGroup, GridCell, GridRow};

use crate::model::JobTemplate;

const EMPTY_CHOICE: &str = "---------";

/// Field set with the job template select box.
pub fn job_template_fieldset(templates: &[JobTemplate]) -> BasicElement {
    let options = std::iter::once(form::option("", EMPTY_CHOICE)).chain(templates.iter().map(
        |template| {
            form::option(&template.id, template.name.as_str()).attr("selected", template.is_selected)
        },
    ));

    let select = form::select()
        .attr("id", "id_job_templates")
        .attr("name", "job_templates")
        .attr("onchange", "reload_job($(this).val())")
        .attr("size", "1")
        .children(options);

    form::fieldset()
        .attr("id", "id_job_template_fieldset")
        .child(form::legend("Job Template:"))
        .child(GridRow::new([GridCell::new(
            FieldGroup::new()
                .label(form::label("Please choose a job template:"))
                .control(select),
        )
        .width(12)]))
}
