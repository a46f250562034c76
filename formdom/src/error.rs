//! Element construction errors

/// Error raised while building an element node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElementError {
    /// A basic element needs a non-empty tag name.
    #[error("Can't create an html element without a tag")]
    MissingTag,
}
