//! Synchronous in-process event dispatcher.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use super::{DomainEvent, EventHandler, HandlerError};

/// Registered handlers, keyed by event name, in registration order.
pub type HandlerRegistry<E> = HashMap<String, Vec<Arc<dyn EventHandler<E>>>>;

/// Errors surfaced by [`EventDispatcher::notify`].
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A handler failed; handlers registered after it were not invoked.
    #[error("Handler error while dispatching {event_name}: {source}")]
    Handler {
        event_name: &'static str,
        source: HandlerError,
    },
}

/// Routes domain events to the handlers registered for their name.
///
/// The dispatcher supports:
/// - Registration: any number of handlers per event name, duplicates included
/// - Removal of a single registration, compared by handler identity
/// - Synchronous fan-out on the caller's stack, stopping at the first failure
///
/// The registry is not synchronized. Share a dispatcher across threads by
/// wrapping it in a lock.
pub struct EventDispatcher<E: DomainEvent> {
    handlers: HandlerRegistry<E>,
}

impl<E: DomainEvent> EventDispatcher<E> {
    /// Creates a dispatcher with an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers a handler for an event name.
    ///
    /// The handler is appended after any handlers already registered under
    /// that name. Registering the same handler twice makes it run twice.
    pub fn register(&mut self, event_name: impl Into<String>, handler: Arc<dyn EventHandler<E>>) {
        let event_name = event_name.into();
        tracing::debug!(%event_name, handler = handler.name(), "registering event handler");
        self.handlers.entry(event_name).or_default().push(handler);
    }

    /// Removes the first registration of `handler` under `event_name`.
    ///
    /// Handlers are matched by identity: only a clone of the same `Arc` that
    /// was registered will match. Unknown names and handlers are ignored. The
    /// name stays in the registry even when its last handler is removed.
    pub fn unregister<H>(&mut self, event_name: &str, handler: &Arc<H>)
    where
        H: ?Sized,
    {
        let Some(handlers) = self.handlers.get_mut(event_name) else {
            return;
        };

        if let Some(index) = handlers
            .iter()
            .position(|registered| std::ptr::addr_eq(Arc::as_ptr(registered), Arc::as_ptr(handler)))
        {
            let removed = handlers.remove(index);
            tracing::debug!(event_name, handler = removed.name(), "unregistered event handler");
        }
    }

    /// Removes every registration for every event name.
    pub fn unregister_all(&mut self) {
        tracing::debug!(event_names = self.handlers.len(), "unregistering all event handlers");
        self.handlers.clear();
    }

    /// Delivers an event to each handler registered under its name.
    ///
    /// Handlers run in registration order before this method returns. The
    /// first handler error aborts the remaining invocations and is returned.
    #[tracing::instrument(skip(self, event), fields(event_name = event.event_name()))]
    pub fn notify(&self, event: &E) -> Result<(), DispatchError> {
        let event_name = event.event_name();
        let Some(handlers) = self.handlers.get(event_name) else {
            return Ok(());
        };

        for handler in handlers {
            if let Err(source) = handler.handle(event) {
                tracing::warn!(handler = handler.name(), error = %source, "event handler failed");
                metrics::counter!("domain_event_handler_failures_total", "event" => event_name)
                    .increment(1);
                return Err(DispatchError::Handler { event_name, source });
            }
        }

        metrics::counter!("domain_events_dispatched_total", "event" => event_name).increment(1);
        tracing::debug!(handlers = handlers.len(), "event dispatched");

        Ok(())
    }

    /// Delivers several events in order, stopping at the first failure.
    pub fn notify_all<'a>(
        &self,
        events: impl IntoIterator<Item = &'a E>,
    ) -> Result<(), DispatchError>
    where
        E: 'a,
    {
        for event in events {
            self.notify(event)?;
        }
        Ok(())
    }

    /// Returns the full registry.
    pub fn event_handlers(&self) -> &HandlerRegistry<E> {
        &self.handlers
    }

    /// Returns the handlers registered under an event name.
    ///
    /// Returns None if the name was never registered or the registry was
    /// cleared since, and an empty slice if every handler was unregistered.
    pub fn handlers_for(&self, event_name: &str) -> Option<&[Arc<dyn EventHandler<E>>]> {
        self.handlers.get(event_name).map(Vec::as_slice)
    }
}

impl<E: DomainEvent> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DomainEvent> std::fmt::Debug for EventDispatcher<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (event_name, handlers) in &self.handlers {
            let names: Vec<_> = handlers.iter().map(|h| h.name()).collect();
            map.entry(event_name, &names);
        }
        map.finish()
    }
}
