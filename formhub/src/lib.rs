//! Change-event dispatch for rendered forms.
//!
//! A [`Dispatcher`] holds an ordered list of handlers. Each handler names the
//! element it listens to, a predicate deciding whether it applies, and the
//! action to run. The surrounding page forwards every field change to
//! [`Dispatcher::notify`].
//!
//! The dispatcher is a plain value owned by whoever owns the page. It is not
//! synchronized; sharing it across threads requires wrapping it in a lock.

pub mod bind;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod target;

pub use config::{DispatcherConfig, FailurePolicy};
pub use dispatcher::{Dispatcher, HandlerIndex, NotifyReport};
pub use error::{DispatchError, HandlerFailure, HandlerStage};
pub use handler::{Action, HandlerError, Predicate, Selector};
pub use target::ChangeTarget;
