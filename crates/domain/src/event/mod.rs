//! Domain event contracts and the in-process event dispatcher.

mod dispatcher;
mod handler;

pub use dispatcher::{DispatchError, EventDispatcher, HandlerRegistry};
pub use handler::{EventHandler, HandlerError, HandlerResult};

use chrono::{DateTime, Utc};

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: std::fmt::Debug + Send + Sync {
    /// Returns the event type name.
    ///
    /// This is the key the [`EventDispatcher`] routes on.
    fn event_name(&self) -> &'static str;

    /// Returns when the event occurred.
    fn occurred_at(&self) -> DateTime<Utc>;
}
