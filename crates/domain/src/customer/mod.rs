//! Customer entity, its value objects, events and event handlers.

mod entity;
mod events;
mod factory;
mod handlers;
mod value_objects;

pub use entity::Customer;
pub use events::{CustomerAddressChangedData, CustomerCreatedData, CustomerEvent};
pub use factory::CustomerFactory;
pub use handlers::{
    CustomerAddressChangedLogHandler, FirstCustomerCreatedLogHandler,
    SecondCustomerCreatedLogHandler,
};
pub use value_objects::Address;

use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomerError {
    /// Customer ID is required.
    #[error("Customer ID is required")]
    IdRequired,

    /// Customer name is required.
    #[error("Customer name is required")]
    NameRequired,

    /// A customer cannot be activated without an address.
    #[error("Address is mandatory to activate a customer")]
    AddressRequired,
}
