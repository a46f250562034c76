//! Dispatcher configuration.

/// What `notify` does when a handler fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the failure, record it in the report and keep notifying.
    ///
    /// A caught panic still goes through the process panic hook first, so
    /// the default hook prints it to stderr as well. Binaries that want the
    /// log line only should install their own hook with
    /// [`std::panic::set_hook`].
    #[default]
    Isolate,
    /// Stop the pass and return the failure to the caller.
    Abort,
}

#[derive(Debug, Clone, Default)]
pub struct DispatcherConfig {
    /// Behavior when a selector, predicate or action fails.
    pub on_failure: FailurePolicy,

    /// Whether the dispatcher starts active. Off by default.
    pub start_active: bool,
}

impl DispatcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_failure(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }

    pub fn start_active(mut self) -> Self {
        self.start_active = true;
        self
    }
}
