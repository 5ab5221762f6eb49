//! Value objects for the customer domain.

use serde::{Deserialize, Serialize};

/// Postal address of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    /// Creates a new address.
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.street, self.number, self.zip, self.city
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_display() {
        let address = Address::new("Street 1", 123, "13330-250", "São Paulo");
        assert_eq!(address.to_string(), "Street 1, 123, 13330-250 São Paulo");
    }

    #[test]
    fn test_address_accessors() {
        let address = Address::new("Street", 1, "12345678", "City");
        assert_eq!(address.street(), "Street");
        assert_eq!(address.number(), 1);
        assert_eq!(address.zip(), "12345678");
        assert_eq!(address.city(), "City");
    }
}
