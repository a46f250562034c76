//! The three parts of an event handler.
//!
//! A handler is a [`Selector`] naming the element it listens to, a
//! [`Predicate`] deciding whether a change applies, and an [`Action`] run when
//! it does. Closures are adapted with [`selector_fn`], [`predicate_fn`] and
//! [`action_fn`]; the named types below cover the common cases.

use std::cell::RefCell;
use std::rc::Rc;

use crate::target::ChangeTarget;

/// Error returned by a failing action.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Resolves the id of the element a handler listens to.
///
/// Resolved on every notification, so the target may change over time.
pub trait Selector {
    fn target_id(&self) -> String;
}

pub trait Predicate<E> {
    fn check(&self, element: &E) -> bool;
}

pub trait Action<E> {
    fn apply(&self, element: &E) -> Result<(), HandlerError>;
}

// =============================================================================
// Selectors
// =============================================================================

/// A fixed element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl Selector for ElementId {
    fn target_id(&self) -> String {
        self.0.clone()
    }
}

impl Selector for &'static str {
    fn target_id(&self) -> String {
        (*self).to_string()
    }
}

impl Selector for String {
    fn target_id(&self) -> String {
        self.clone()
    }
}

pub struct FnSelector<F>(F);

impl<F: Fn() -> String> Selector for FnSelector<F> {
    fn target_id(&self) -> String {
        (self.0)()
    }
}

pub fn selector_fn<F: Fn() -> String>(f: F) -> FnSelector<F> {
    FnSelector(f)
}

// =============================================================================
// Predicates
// =============================================================================

/// Matches every change.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl<E> Predicate<E> for Always {
    fn check(&self, _element: &E) -> bool {
        true
    }
}

/// Matches nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl<E> Predicate<E> for Never {
    fn check(&self, _element: &E) -> bool {
        false
    }
}

/// Matches when an attribute has the given value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrEquals {
    pub name: String,
    pub value: String,
}

impl AttrEquals {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl<E: ChangeTarget> Predicate<E> for AttrEquals {
    fn check(&self, element: &E) -> bool {
        element.attribute(&self.name) == Some(self.value.as_str())
    }
}

/// Matches when the element carries a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasClass(pub String);

impl<E: ChangeTarget> Predicate<E> for HasClass {
    fn check(&self, element: &E) -> bool {
        element.has_class(&self.0)
    }
}

pub struct FnPredicate<F>(F);

impl<E, F: Fn(&E) -> bool> Predicate<E> for FnPredicate<F> {
    fn check(&self, element: &E) -> bool {
        (self.0)(element)
    }
}

pub fn predicate_fn<E, F: Fn(&E) -> bool>(f: F) -> FnPredicate<F> {
    FnPredicate(f)
}

// =============================================================================
// Actions
// =============================================================================

/// Records the id of every element it is applied to.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<Option<String>>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Ids of the elements seen so far, in order.
    pub fn calls(&self) -> Vec<Option<String>> {
        self.calls.borrow().clone()
    }
}

impl<E: ChangeTarget> Action<E> for Recorder {
    fn apply(&self, element: &E) -> Result<(), HandlerError> {
        self.calls
            .borrow_mut()
            .push(element.element_id().map(str::to_string));
        Ok(())
    }
}

pub struct FnAction<F>(F);

impl<E, F: Fn(&E) -> Result<(), HandlerError>> Action<E> for FnAction<F> {
    fn apply(&self, element: &E) -> Result<(), HandlerError> {
        (self.0)(element)
    }
}

pub fn action_fn<E, F: Fn(&E) -> Result<(), HandlerError>>(f: F) -> FnAction<F> {
    FnAction(f)
}
