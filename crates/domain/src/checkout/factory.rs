//! Order factory.

use common::EntityId;
use serde::{Deserialize, Serialize};

use crate::value_objects::Money;

use super::{Order, OrderError, OrderItem};

/// Input describing one order item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemProps {
    pub id: EntityId,
    pub name: String,
    pub product_id: EntityId,
    pub quantity: u32,
    pub price: Money,
}

/// Input describing a whole order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderProps {
    pub id: EntityId,
    pub customer_id: EntityId,
    pub items: Vec<OrderItemProps>,
}

/// Builds orders from plain input data.
pub struct OrderFactory;

impl OrderFactory {
    /// Creates an order and its items from `props`.
    pub fn create(props: OrderProps) -> Result<Order, OrderError> {
        let items = props
            .items
            .into_iter()
            .map(|item| OrderItem::new(item.id, item.product_id, item.name, item.price, item.quantity))
            .collect::<Result<Vec<_>, _>>()?;

        Order::new(props.id, props.customer_id, items)
    }
}
