//! Checkout: orders, order items, and the services placing them.

mod entity;
mod factory;
mod service;

pub use entity::{Order, OrderItem};
pub use factory::{OrderFactory, OrderItemProps, OrderProps};
pub use service::OrderService;

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Order ID is required.
    #[error("Order ID is required")]
    IdRequired,

    /// Customer ID is required.
    #[error("Customer ID is required")]
    CustomerIdRequired,

    /// Order has no items.
    #[error("Order has no items")]
    NoItems,

    /// Order item ID is required.
    #[error("Order item ID is required")]
    ItemIdRequired,

    /// Invalid quantity.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    /// Invalid price.
    #[error("Invalid price: {price} (must not be negative)")]
    NegativePrice { price: i64 },
}
