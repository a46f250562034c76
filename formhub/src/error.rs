//! Dispatch error types.

use std::any::Any;
use std::fmt;

use crate::dispatcher::HandlerIndex;

/// The part of a handler that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerStage {
    Selector,
    Predicate,
    Action,
}

impl fmt::Display for HandlerStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector => write!(f, "selector"),
            Self::Predicate => write!(f, "predicate"),
            Self::Action => write!(f, "action"),
        }
    }
}

/// A handler that panicked or whose action returned an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Handler {index} failed in {stage}: {message}")]
pub struct HandlerFailure {
    pub index: HandlerIndex,
    pub stage: HandlerStage,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// `unregister` was given an index past the end of the registry.
    #[error("No event handler at index {index} (registry holds {len})")]
    NoSuchHandler { index: usize, len: usize },

    /// A handler failed while the dispatcher runs with `FailurePolicy::Abort`.
    #[error(transparent)]
    HandlerFailed(#[from] HandlerFailure),
}

/// Extract a human-readable message from a panic payload.
pub fn extract_panic_message(panic: &Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
