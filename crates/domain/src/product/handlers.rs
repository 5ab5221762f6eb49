//! Sample handlers reacting to product events.

use crate::event::{EventHandler, HandlerResult};

use super::ProductEvent;

/// Announces new products by email.
///
/// Delivery is simulated with a log record addressed to `recipient`.
#[derive(Debug, Clone)]
pub struct SendEmailWhenProductIsCreatedHandler {
    recipient: String,
}

impl SendEmailWhenProductIsCreatedHandler {
    /// Creates a handler mailing the given recipient.
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

impl Default for SendEmailWhenProductIsCreatedHandler {
    fn default() -> Self {
        Self::new("catalog@example.com")
    }
}

impl EventHandler<ProductEvent> for SendEmailWhenProductIsCreatedHandler {
    fn name(&self) -> &'static str {
        "SendEmailWhenProductIsCreatedHandler"
    }

    fn handle(&self, event: &ProductEvent) -> HandlerResult {
        let ProductEvent::ProductCreated(data) = event;
        tracing::info!(
            recipient = %self.recipient,
            product_id = %data.product_id,
            price = %data.price,
            "Sending email: product {} created",
            data.name
        );
        Ok(())
    }
}
