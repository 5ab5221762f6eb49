//! Customer domain events.

use chrono::{DateTime, Utc};
use common::EntityId;
use serde::{Deserialize, Serialize};

use crate::event::DomainEvent;

use super::Address;

/// Events that can occur on a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CustomerEvent {
    /// Customer was created.
    #[serde(rename = "CustomerCreatedEvent")]
    CustomerCreated(CustomerCreatedData),

    /// Customer moved to a new address.
    #[serde(rename = "CustomerAddressChangedEvent")]
    CustomerAddressChanged(CustomerAddressChangedData),
}

impl CustomerEvent {
    /// Registration key for [`CustomerEvent::CustomerCreated`].
    pub const CREATED: &'static str = "CustomerCreatedEvent";

    /// Registration key for [`CustomerEvent::CustomerAddressChanged`].
    pub const ADDRESS_CHANGED: &'static str = "CustomerAddressChangedEvent";

    pub fn customer_id(&self) -> &EntityId {
        match self {
            CustomerEvent::CustomerCreated(data) => &data.customer_id,
            CustomerEvent::CustomerAddressChanged(data) => &data.customer_id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CustomerEvent::CustomerCreated(data) => &data.name,
            CustomerEvent::CustomerAddressChanged(data) => &data.name,
        }
    }

    /// The address the event carries. A customer created without one has none.
    pub fn address(&self) -> Option<&Address> {
        match self {
            CustomerEvent::CustomerCreated(data) => data.address.as_ref(),
            CustomerEvent::CustomerAddressChanged(data) => Some(&data.address),
        }
    }
}

impl DomainEvent for CustomerEvent {
    fn event_name(&self) -> &'static str {
        match self {
            CustomerEvent::CustomerCreated(_) => Self::CREATED,
            CustomerEvent::CustomerAddressChanged(_) => Self::ADDRESS_CHANGED,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CustomerEvent::CustomerCreated(data) => data.occurred_at,
            CustomerEvent::CustomerAddressChanged(data) => data.occurred_at,
        }
    }
}

/// Data for CustomerCreated event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreatedData {
    /// The new customer's ID.
    pub customer_id: EntityId,

    /// Customer name.
    pub name: String,

    /// Address given at creation, if any.
    pub address: Option<Address>,

    /// When the customer was created.
    pub occurred_at: DateTime<Utc>,
}

/// Data for CustomerAddressChanged event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerAddressChangedData {
    /// The customer whose address changed.
    pub customer_id: EntityId,

    /// Customer name at the time of the change.
    pub name: String,

    /// The new address.
    pub address: Address,

    /// When the address changed.
    pub occurred_at: DateTime<Utc>,
}

// Convenience constructors for events
impl CustomerEvent {
    /// Creates a CustomerCreated event.
    pub fn customer_created(
        customer_id: EntityId,
        name: impl Into<String>,
        address: Option<Address>,
    ) -> Self {
        CustomerEvent::CustomerCreated(CustomerCreatedData {
            customer_id,
            name: name.into(),
            address,
            occurred_at: Utc::now(),
        })
    }

    /// Creates a CustomerAddressChanged event.
    pub fn customer_address_changed(
        customer_id: EntityId,
        name: impl Into<String>,
        address: Address,
    ) -> Self {
        CustomerEvent::CustomerAddressChanged(CustomerAddressChangedData {
            customer_id,
            name: name.into(),
            address,
            occurred_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_name() {
        let event = CustomerEvent::customer_created(EntityId::new("1"), "Customer 1", None);
        assert_eq!(event.event_name(), "CustomerCreatedEvent");

        let address = Address::new("Street", 1, "12345678", "City");
        let event = CustomerEvent::customer_address_changed(EntityId::new("1"), "Customer 1", address);
        assert_eq!(event.event_name(), "CustomerAddressChangedEvent");
    }

    #[test]
    fn test_event_serialization_uses_event_name_tag() {
        let event = CustomerEvent::customer_created(EntityId::new("1"), "Customer 1", None);

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "CustomerCreatedEvent");
        assert_eq!(json["data"]["name"], "Customer 1");

        let deserialized: CustomerEvent = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized.event_name(), CustomerEvent::CREATED);
        assert_eq!(deserialized.occurred_at(), event.occurred_at());
    }

    #[test]
    fn test_address_accessor_covers_both_events() {
        let address = Address::new("Street", 1, "12345678", "City");

        let bare = CustomerEvent::customer_created(EntityId::new("1"), "Customer 1", None);
        let created =
            CustomerEvent::customer_created(EntityId::new("1"), "Customer 1", Some(address.clone()));
        let changed =
            CustomerEvent::customer_address_changed(EntityId::new("1"), "Customer 1", address.clone());

        assert!(bare.address().is_none());
        assert_eq!(created.address(), Some(&address));
        assert_eq!(changed.address(), Some(&address));
        assert_eq!(changed.name(), "Customer 1");
        assert_eq!(changed.customer_id().as_str(), "1");
    }
}
