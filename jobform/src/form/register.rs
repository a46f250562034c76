use formdom::element::form;
use formdom::{BasicElement, GridCell, GridRow, Renderable};
use log::debug;

use super::{job_fieldset, job_params_fieldset, job_template_fieldset};
use crate::error::JobFormError;
use crate::model::RegisterFormData;

/// The complete job registration form.
pub fn job_register_form(data: &RegisterFormData) -> Result<BasicElement, JobFormError> {
    let actions = BasicElement::new("div")?
        .attr("class", "form-actions")
        .child(
            form::button("Submit")
                .attr("class", "btn btn-primary")
                .attr("type", "submit"),
        )
        .child(
            BasicElement::new("div")?
                .attr("style", "display:inline-block; margin-left: 30px;")
                .text("&nbsp;"),
        )
        .child(
            BasicElement::new("a")?
                .attr("href", "/jobs/")
                .text("back to the list"),
        );

    Ok(form::form()
        .attr("class", "form")
        .attr("action", "")
        .attr("method", "post")
        .child(
            form::input()
                .attr("type", "hidden")
                .attr("name", "csrfmiddlewaretoken")
                .attr("value", data.csrf_token.as_str()),
        )
        .child(job_template_fieldset(&data.job_templates))
        .child(job_fieldset(&data.job))
        .child(job_params_fieldset(&data.parameters, data.limits))
        .child(GridRow::new([
            GridCell::new(BasicElement::new("hr")?).width(12)
        ]))
        .child(actions))
}

/// Build the registration form and serialize it to HTML.
pub fn render_register_form(data: &RegisterFormData) -> Result<String, JobFormError> {
    let html = job_register_form(data)?.render().to_html();
    debug!("Rendered registration form ({} bytes)", html.len());
    Ok(html)
}
