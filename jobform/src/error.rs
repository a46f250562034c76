//! Error types

use formdom::ElementError;

/// Error raised while loading records or assembling the form.
#[derive(Debug, thiserror::Error)]
pub enum JobFormError {
    /// The input could not be decoded.
    #[error("Invalid form data: {0}")]
    Parse(#[from] serde_json::Error),

    /// An element of the form could not be built.
    #[error("Form assembly failed: {0}")]
    Element(#[from] ElementError),
}
