//! Job registration form
//!
//! Builds the element trees of the job registration page from plain job,
//! job template and job parameter records.

pub mod error;
pub mod form;
pub mod model;

pub use error::JobFormError;
pub use form::{
    FormsetLimits, job_fieldset, job_params_fieldset, job_register_form, job_template_fieldset,
    render_register_form,
};
pub use model::{Job, JobParameter, JobTemplate, RegisterFormData, Value};
