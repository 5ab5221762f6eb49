//! Product domain events.

use chrono::{DateTime, Utc};
use common::EntityId;
use serde::{Deserialize, Serialize};

use crate::event::DomainEvent;
use crate::value_objects::Money;

/// Events that can occur on a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ProductEvent {
    /// Product was created.
    #[serde(rename = "ProductCreatedEvent")]
    ProductCreated(ProductCreatedData),
}

impl ProductEvent {
    /// Registration key for [`ProductEvent::ProductCreated`].
    pub const CREATED: &'static str = "ProductCreatedEvent";

    /// Creates a ProductCreated event.
    pub fn product_created(
        product_id: EntityId,
        name: impl Into<String>,
        description: Option<String>,
        price: Money,
    ) -> Self {
        ProductEvent::ProductCreated(ProductCreatedData {
            product_id,
            name: name.into(),
            description,
            price,
            occurred_at: Utc::now(),
        })
    }
}

impl DomainEvent for ProductEvent {
    fn event_name(&self) -> &'static str {
        match self {
            ProductEvent::ProductCreated(_) => Self::CREATED,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ProductEvent::ProductCreated(data) => data.occurred_at,
        }
    }
}

/// Data for ProductCreated event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreatedData {
    /// The new product's ID.
    pub product_id: EntityId,

    /// Product name.
    pub name: String,

    /// Optional marketing description.
    pub description: Option<String>,

    /// Selling price at creation.
    pub price: Money,

    /// When the product was created.
    pub occurred_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_created_serialization() {
        let event = ProductEvent::product_created(
            EntityId::new("p-1"),
            "Product 1",
            Some("Product 1 description".to_string()),
            Money::from_dollars(10),
        );
        assert_eq!(event.event_name(), "ProductCreatedEvent");

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: ProductEvent = serde_json::from_str(&json).unwrap();

        let ProductEvent::ProductCreated(data) = deserialized;
        assert_eq!(data.name, "Product 1");
        assert_eq!(data.description.as_deref(), Some("Product 1 description"));
        assert_eq!(data.price.cents(), 1000);
    }
}
