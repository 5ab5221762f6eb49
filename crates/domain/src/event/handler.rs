//! Event handler capability.

use thiserror::Error;

/// Error returned by an event handler that could not complete its side effect.
#[derive(Debug, Error)]
#[error("{handler} failed: {message}")]
pub struct HandlerError {
    /// Name of the failing handler.
    pub handler: &'static str,

    /// Human-readable failure description.
    pub message: String,
}

impl HandlerError {
    /// Creates a new handler error.
    pub fn new(handler: &'static str, message: impl Into<String>) -> Self {
        Self {
            handler,
            message: message.into(),
        }
    }
}

/// Result type returned by [`EventHandler::handle`].
pub type HandlerResult = Result<(), HandlerError>;

/// A handler reacting to domain events of type `E`.
///
/// Handlers are registered with an [`EventDispatcher`](super::EventDispatcher)
/// under an event name and invoked synchronously, in registration order,
/// whenever an event with that name is notified.
pub trait EventHandler<E>: Send + Sync {
    /// Returns the handler name, used in logs and errors.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Handles a single event.
    fn handle(&self, event: &E) -> HandlerResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    impl EventHandler<u32> for Noop {
        fn handle(&self, _event: &u32) -> HandlerResult {
            Ok(())
        }
    }

    #[test]
    fn default_name_is_type_name() {
        assert!(Noop.name().ends_with("Noop"));
    }

    #[test]
    fn handler_error_display() {
        let err = HandlerError::new("Mailer", "smtp unavailable");
        assert_eq!(err.to_string(), "Mailer failed: smtp unavailable");
    }
}
