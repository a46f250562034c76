//! Field set and form assemblers

mod columns;
mod job;
mod parameters;
mod register;
mod template;

pub use job::job_fieldset;
pub use parameters::{FormsetLimits, job_params_fieldset};
pub use register::{job_register_form, render_register_form};
pub use template::job_template_fieldset;
