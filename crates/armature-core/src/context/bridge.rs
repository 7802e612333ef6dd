use std::fmt::Debug;
use std::sync::Arc;

use crate::context::error::ContextError;
use crate::kernel::constants;

/// Request-scoped state held by an external container for the current thread.
pub trait RequestContainer: Send + Sync + Debug {
    /// Prepare request state for the current thread
    fn initialize_request(&self) -> Result<(), ContextError>;

    /// Attach a property to the current request
    fn set_request_property(&self, key: &str, value: String);

    /// Drop the current thread's request state
    fn remove_request(&self);
}

/// Sets up and tears down request state for work running outside a request,
/// such as background threads.
///
/// Unlike the bootstrap, a failure to initialize the request is logged and
/// the caller carries on: the work runs with whatever state the container
/// could provide.
#[derive(Debug, Clone)]
pub struct ContextBridge {
    container: Arc<dyn RequestContainer>,
}

impl ContextBridge {
    pub fn new(container: Arc<dyn RequestContainer>) -> Self {
        Self { container }
    }

    /// Initialize the request and attach `context` to it under
    /// [`REQUEST_CONTEXT_PROPERTY`](constants::REQUEST_CONTEXT_PROPERTY).
    pub fn initialize_request_context(&self, context: impl Into<String>) {
        if let Err(e) = self.container.initialize_request() {
            log::error!(
                "{}. Components relying on request state may misbehave; restarting once the cause is fixed is recommended.",
                e
            );
        }
        self.container
            .set_request_property(constants::REQUEST_CONTEXT_PROPERTY, context.into());
    }

    /// Remove the request state so it does not outlive the work.
    pub fn teardown_request_context(&self) {
        self.container.remove_request();
    }
}
