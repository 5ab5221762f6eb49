//! Domain layer for the e-commerce sample.
//!
//! This crate provides:
//! - [`EventDispatcher`] routing [`DomainEvent`]s to registered [`EventHandler`]s
//! - Customer, product and checkout entities with their value objects
//! - Factories and services creating entities and recording their events
//! - Sample handlers that log or announce domain events

pub mod checkout;
pub mod customer;
pub mod error;
pub mod event;
pub mod product;
pub mod value_objects;

pub use checkout::{
    Order, OrderError, OrderFactory, OrderItem, OrderItemProps, OrderProps, OrderService,
};
pub use customer::{
    Address, Customer, CustomerAddressChangedData, CustomerAddressChangedLogHandler,
    CustomerCreatedData, CustomerError, CustomerEvent, CustomerFactory,
    FirstCustomerCreatedLogHandler, SecondCustomerCreatedLogHandler,
};
pub use error::DomainError;
pub use event::{
    DispatchError, DomainEvent, EventDispatcher, EventHandler, HandlerError, HandlerRegistry,
    HandlerResult,
};
pub use product::{
    Product, ProductCreatedData, ProductError, ProductEvent, ProductFactory, ProductKind,
    ProductService, SendEmailWhenProductIsCreatedHandler,
};
pub use value_objects::Money;
