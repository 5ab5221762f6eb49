//! Domain error types.

use thiserror::Error;

use crate::checkout::OrderError;
use crate::customer::CustomerError;
use crate::event::DispatchError;
use crate::product::ProductError;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A customer invariant was violated.
    #[error("Customer error: {0}")]
    Customer(#[from] CustomerError),

    /// A product invariant was violated.
    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    /// An order invariant was violated.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// An event handler failed during dispatch.
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}
