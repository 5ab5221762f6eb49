//! Sample handlers reacting to customer events.

use crate::event::{DomainEvent, EventHandler, HandlerResult};

use super::CustomerEvent;

/// Logs the first notice that a customer was created.
#[derive(Debug, Default)]
pub struct FirstCustomerCreatedLogHandler;

impl EventHandler<CustomerEvent> for FirstCustomerCreatedLogHandler {
    fn name(&self) -> &'static str {
        "FirstCustomerCreatedLogHandler"
    }

    fn handle(&self, event: &CustomerEvent) -> HandlerResult {
        match event {
            CustomerEvent::CustomerCreated(data) => {
                tracing::info!(customer_id = %data.customer_id, "first log for CustomerCreated");
            }
            other => tracing::debug!(event_name = other.event_name(), "ignoring event"),
        }
        Ok(())
    }
}

/// Logs the second notice that a customer was created.
#[derive(Debug, Default)]
pub struct SecondCustomerCreatedLogHandler;

impl EventHandler<CustomerEvent> for SecondCustomerCreatedLogHandler {
    fn name(&self) -> &'static str {
        "SecondCustomerCreatedLogHandler"
    }

    fn handle(&self, event: &CustomerEvent) -> HandlerResult {
        match event {
            CustomerEvent::CustomerCreated(data) => {
                tracing::info!(customer_id = %data.customer_id, "second log for CustomerCreated");
            }
            other => tracing::debug!(event_name = other.event_name(), "ignoring event"),
        }
        Ok(())
    }
}

/// Logs a customer's new address.
#[derive(Debug, Default)]
pub struct CustomerAddressChangedLogHandler;

impl EventHandler<CustomerEvent> for CustomerAddressChangedLogHandler {
    fn name(&self) -> &'static str {
        "CustomerAddressChangedLogHandler"
    }

    fn handle(&self, event: &CustomerEvent) -> HandlerResult {
        match Self::message(event) {
            Some(message) => tracing::info!(customer_id = %event.customer_id(), "{message}"),
            None => tracing::debug!(
                event_name = event.event_name(),
                customer_id = %event.customer_id(),
                "event carries no address"
            ),
        }
        Ok(())
    }
}

impl CustomerAddressChangedLogHandler {
    /// Log line for an event carrying an address, whichever event it is.
    fn message(event: &CustomerEvent) -> Option<String> {
        event.address().map(|address| {
            format!(
                "Customer address {}, {} changed to: {}",
                event.customer_id(),
                event.name(),
                address
            )
        })
    }
}
