//! Product entity, events, handlers, factory and service.

mod entity;
mod events;
mod factory;
mod handlers;
mod service;

pub use entity::{Product, ProductKind};
pub use events::{ProductCreatedData, ProductEvent};
pub use factory::ProductFactory;
pub use handlers::SendEmailWhenProductIsCreatedHandler;
pub use service::ProductService;

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    /// Product ID is required.
    #[error("Product ID is required")]
    IdRequired,

    /// Product name is required.
    #[error("Product name is required")]
    NameRequired,

    /// Price is below zero.
    #[error("Invalid price: {price} (must not be negative)")]
    NegativePrice { price: i64 },

    /// Unknown product kind.
    #[error("Product type not supported: {0}")]
    UnknownKind(String),
}
