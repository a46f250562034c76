//! Input of the registration form

use serde::Deserialize;
use serde::Serialize;

use super::{Job, JobParameter, JobTemplate};
use crate::error::JobFormError;
use crate::form::FormsetLimits;

/// Everything the registration form is built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterFormData {
    #[serde(alias = "csrfToken", default)]
    pub csrf_token: String,
    #[serde(alias = "jobTemplates", default)]
    pub job_templates: Vec<JobTemplate>,
    #[serde(default)]
    pub job: Job,
    #[serde(alias = "jobParams", default)]
    pub parameters: Vec<JobParameter>,
    #[serde(default)]
    pub limits: FormsetLimits,
}

impl RegisterFormData {
    pub fn from_json(json: &str) -> Result<Self, JobFormError> {
        Ok(serde_json::from_str(json)?)
    }
}
