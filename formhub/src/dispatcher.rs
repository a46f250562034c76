use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use formdom::DomElement;
use log::{debug, error, trace};

use crate::config::{DispatcherConfig, FailurePolicy};
use crate::error::{DispatchError, HandlerFailure, HandlerStage, extract_panic_message};
use crate::handler::{Action, Predicate, Selector};
use crate::target::ChangeTarget;

/// Position of a handler in the registry.
///
/// Removing an earlier handler shifts every later index down by one, so
/// indices should not be kept across removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandlerIndex(pub usize);

impl HandlerIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for HandlerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of one `notify` pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifyReport {
    /// Handlers whose action ran successfully, in registry order.
    pub fired: Vec<HandlerIndex>,
    /// Handlers that failed and were skipped under `FailurePolicy::Isolate`.
    pub failures: Vec<HandlerFailure>,
}

impl NotifyReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

struct Handler<E> {
    selector: Box<dyn Selector>,
    predicate: Box<dyn Predicate<E>>,
    action: Box<dyn Action<E>>,
}

enum Outcome {
    Skipped,
    Fired,
}

impl<E> Handler<E> {
    fn run(&self, element: &E, changed_id: Option<&str>) -> Result<Outcome, (HandlerStage, String)> {
        let target = guard(HandlerStage::Selector, || self.selector.target_id())?;
        if changed_id != Some(target.as_str()) {
            return Ok(Outcome::Skipped);
        }

        if !guard(HandlerStage::Predicate, || self.predicate.check(element))? {
            return Ok(Outcome::Skipped);
        }

        guard(HandlerStage::Action, || self.action.apply(element))?
            .map_err(|e| (HandlerStage::Action, e.to_string()))?;
        Ok(Outcome::Fired)
    }
}

/// Run one handler step, turning a panic into a failure.
///
/// The panic hook is left alone; it runs before the unwind is caught.
fn guard<T>(stage: HandlerStage, f: impl FnOnce() -> T) -> Result<T, (HandlerStage, String)> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|panic| (stage, extract_panic_message(&panic)))
}

/// Routes field changes to registered handlers.
///
/// Starts inactive with an empty registry unless configured otherwise.
pub struct Dispatcher<E = DomElement> {
    config: DispatcherConfig,
    active: bool,
    handlers: Vec<Handler<E>>,
}

impl<E: ChangeTarget> Dispatcher<E> {
    pub fn new() -> Self {
        Self::with_config(DispatcherConfig::default())
    }

    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            active: config.start_active,
            config,
            handlers: Vec::new(),
        }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Append a handler and return its position.
    pub fn register(
        &mut self,
        selector: impl Selector + 'static,
        predicate: impl Predicate<E> + 'static,
        action: impl Action<E> + 'static,
    ) -> HandlerIndex {
        self.handlers.push(Handler {
            selector: Box::new(selector),
            predicate: Box::new(predicate),
            action: Box::new(action),
        });
        let index = HandlerIndex(self.handlers.len() - 1);
        debug!("Registered event handler {index}");
        index
    }

    /// Remove the handler at `index`. Later handlers move down by one.
    pub fn unregister(&mut self, index: HandlerIndex) -> Result<(), DispatchError> {
        if index.0 >= self.handlers.len() {
            return Err(DispatchError::NoSuchHandler {
                index: index.0,
                len: self.handlers.len(),
            });
        }
        self.handlers.remove(index.0);
        debug!("Removed event handler {index}");
        Ok(())
    }

    /// Remove every handler. The active flag is left as is.
    pub fn clear(&mut self) {
        debug!("Cleared {} event handlers", self.handlers.len());
        self.handlers.clear();
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Tell every handler that `element` changed.
    ///
    /// Handlers run in registration order. A handler fires when its selector
    /// resolves to the element's id and its predicate accepts the element;
    /// every matching handler fires, not just the first. An element without
    /// an id matches no handler.
    pub fn notify(&self, element: &E) -> Result<NotifyReport, DispatchError> {
        let mut report = NotifyReport::default();
        if !self.active {
            trace!("Dispatcher inactive, ignoring change");
            return Ok(report);
        }

        let changed_id = element.element_id();
        trace!("Change on {:?}, {} handlers", changed_id, self.handlers.len());

        for (position, handler) in self.handlers.iter().enumerate() {
            let index = HandlerIndex(position);
            match handler.run(element, changed_id) {
                Ok(Outcome::Skipped) => {}
                Ok(Outcome::Fired) => {
                    debug!("Event handler {index} fired for {:?}", changed_id);
                    report.fired.push(index);
                }
                Err((stage, message)) => {
                    let failure = HandlerFailure {
                        index,
                        stage,
                        message,
                    };
                    match self.config.on_failure {
                        FailurePolicy::Abort => return Err(failure.into()),
                        FailurePolicy::Isolate => {
                            error!("{failure}");
                            report.failures.push(failure);
                        }
                    }
                }
            }
        }

        Ok(report)
    }
}

impl<E: ChangeTarget> Default for Dispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Dispatcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("active", &self.active)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_catches_str_panic() {
        let result: Result<(), _> = guard(HandlerStage::Predicate, || panic!("boom"));
        assert_eq!(result, Err((HandlerStage::Predicate, "boom".to_string())));
    }

    #[test]
    fn test_guard_passes_value_through() {
        assert_eq!(guard(HandlerStage::Selector, || 7), Ok(7));
    }
}
