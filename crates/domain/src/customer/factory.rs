//! Customer factory.

use common::EntityId;

use super::{Address, Customer, CustomerError};

/// Builds new customers with generated IDs.
pub struct CustomerFactory;

impl CustomerFactory {
    /// Creates a customer without an address.
    pub fn create(name: impl Into<String>) -> Result<Customer, CustomerError> {
        Customer::create(EntityId::generate(), name, None)
    }

    /// Creates a customer with an address.
    pub fn create_with_address(
        name: impl Into<String>,
        address: Address,
    ) -> Result<Customer, CustomerError> {
        Customer::create(EntityId::generate(), name, Some(address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_customer() {
        let customer = CustomerFactory::create("John").unwrap();

        assert!(!customer.id().is_empty());
        assert_eq!(customer.name(), "John");
        assert!(customer.address().is_none());
        assert_eq!(customer.pending_events().len(), 1);
    }

    #[test]
    fn test_create_customer_with_address() {
        let address = Address::new("Street", 1, "13330-250", "São Paulo");
        let customer = CustomerFactory::create_with_address("John", address.clone()).unwrap();

        assert_eq!(customer.name(), "John");
        assert_eq!(customer.address(), Some(&address));
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = CustomerFactory::create("A").unwrap();
        let b = CustomerFactory::create("B").unwrap();
        assert_ne!(a.id(), b.id());
    }
}
