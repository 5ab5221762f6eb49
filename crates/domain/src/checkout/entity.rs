//! Order and order item entities.

use common::EntityId;

use crate::value_objects::Money;

use super::OrderError;

/// A line of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    id: EntityId,
    product_id: EntityId,
    name: String,
    price: Money,
    quantity: u32,
}

impl OrderItem {
    /// Creates a new order item.
    pub fn new(
        id: impl Into<EntityId>,
        product_id: impl Into<EntityId>,
        name: impl Into<String>,
        price: Money,
        quantity: u32,
    ) -> Result<Self, OrderError> {
        let id = id.into();
        if id.is_empty() {
            return Err(OrderError::ItemIdRequired);
        }
        if quantity == 0 {
            return Err(OrderError::InvalidQuantity { quantity });
        }
        if price.is_negative() {
            return Err(OrderError::NegativePrice {
                price: price.cents(),
            });
        }

        Ok(Self {
            id,
            product_id: product_id.into(),
            name: name.into(),
            price,
            quantity,
        })
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn product_id(&self) -> &EntityId {
        &self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the total price for this item (quantity * price).
    pub fn total(&self) -> Money {
        self.price.multiply(self.quantity)
    }
}

/// Order aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: EntityId,
    customer_id: EntityId,
    items: Vec<OrderItem>,
}

impl Order {
    /// Creates an order. At least one item is required.
    pub fn new(
        id: impl Into<EntityId>,
        customer_id: impl Into<EntityId>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };

        if order.id.is_empty() {
            return Err(OrderError::IdRequired);
        }
        if order.customer_id.is_empty() {
            return Err(OrderError::CustomerIdRequired);
        }
        if order.items.is_empty() {
            return Err(OrderError::NoItems);
        }

        Ok(order)
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn customer_id(&self) -> &EntityId {
        &self.customer_id
    }

    /// Returns the items in the order they were added.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns the sum of every item total.
    pub fn total(&self) -> Money {
        self.items.iter().map(OrderItem::total).sum()
    }

    /// Appends an item to the order.
    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }
}
