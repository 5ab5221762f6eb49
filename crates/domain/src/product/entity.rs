//! Product entity.

use common::EntityId;

use crate::value_objects::Money;

use super::{ProductError, ProductEvent};

/// Pricing variant of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProductKind {
    /// Sold at its base price.
    #[default]
    A,

    /// Sold at twice its base price.
    B,
}

impl ProductKind {
    /// Returns the kind code used by factories and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::A => "a",
            ProductKind::B => "b",
        }
    }
}

impl std::str::FromStr for ProductKind {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(ProductKind::A),
            "b" => Ok(ProductKind::B),
            other => Err(ProductError::UnknownKind(other.to_string())),
        }
    }
}

impl std::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Product entity.
#[derive(Debug, Clone)]
pub struct Product {
    id: EntityId,
    name: String,
    base_price: Money,
    kind: ProductKind,
    events: Vec<ProductEvent>,
}

impl Product {
    /// Creates a standard product without recording any event.
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Self, ProductError> {
        Self::with_kind(id, name, price, ProductKind::A)
    }

    /// Creates a product of the given kind without recording any event.
    pub fn with_kind(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        price: Money,
        kind: ProductKind,
    ) -> Result<Self, ProductError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            base_price: price,
            kind,
            events: Vec::new(),
        };
        product.validate()?;
        Ok(product)
    }

    /// Creates a new product and records a ProductCreated event.
    pub fn create(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        price: Money,
        kind: ProductKind,
    ) -> Result<Self, ProductError> {
        let mut product = Self::with_kind(id, name, price, kind)?;
        product.events.push(ProductEvent::product_created(
            product.id.clone(),
            product.name.clone(),
            None,
            product.price(),
        ));
        Ok(product)
    }

    fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_empty() {
            return Err(ProductError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        if self.base_price.is_negative() {
            return Err(ProductError::NegativePrice {
                price: self.base_price.cents(),
            });
        }
        Ok(())
    }
}

// Query methods
impl Product {
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    /// Returns the stored price, before the kind's pricing rule.
    pub fn base_price(&self) -> Money {
        self.base_price
    }

    /// Returns the price the product sells at.
    pub fn price(&self) -> Money {
        match self.kind {
            ProductKind::A => self.base_price,
            ProductKind::B => self.base_price.multiply(2),
        }
    }

    /// Returns events recorded since the last [`Product::take_events`].
    pub fn pending_events(&self) -> &[ProductEvent] {
        &self.events
    }
}

// Mutations
impl Product {
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    /// Replaces the base price.
    pub fn change_price(&mut self, price: Money) -> Result<(), ProductError> {
        if price.is_negative() {
            return Err(ProductError::NegativePrice {
                price: price.cents(),
            });
        }
        self.base_price = price;
        Ok(())
    }

    /// Drains the recorded events.
    pub fn take_events(&mut self) -> Vec<ProductEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_id() {
        let err = Product::new("", "Product 1", Money::from_dollars(100)).unwrap_err();
        assert_eq!(err, ProductError::IdRequired);
    }

    #[test]
    fn test_new_requires_name() {
        let err = Product::new("123", "", Money::from_dollars(100)).unwrap_err();
        assert_eq!(err, ProductError::NameRequired);
    }

    #[test]
    fn test_new_rejects_negative_price() {
        let err = Product::new("123", "Name", Money::from_cents(-1)).unwrap_err();
        assert_eq!(err, ProductError::NegativePrice { price: -1 });
    }

    #[test]
    fn test_change_name_and_price() {
        let mut product = Product::new("123", "Product 1", Money::from_dollars(100)).unwrap();
        product.change_name("Product 2").unwrap();
        product.change_price(Money::from_dollars(150)).unwrap();

        assert_eq!(product.name(), "Product 2");
        assert_eq!(product.price(), Money::from_dollars(150));
        assert!(product.change_price(Money::from_cents(-5)).is_err());
        assert_eq!(product.price(), Money::from_dollars(150));
    }

    #[test]
    fn test_kind_b_doubles_price() {
        let product =
            Product::with_kind("123", "Product B", Money::from_dollars(10), ProductKind::B)
                .unwrap();
        assert_eq!(product.base_price(), Money::from_dollars(10));
        assert_eq!(product.price(), Money::from_dollars(20));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("a".parse::<ProductKind>().unwrap(), ProductKind::A);
        assert_eq!("b".parse::<ProductKind>().unwrap(), ProductKind::B);
        assert_eq!(
            "c".parse::<ProductKind>().unwrap_err(),
            ProductError::UnknownKind("c".to_string())
        );
    }

    #[test]
    fn test_create_records_event_with_selling_price() {
        let mut product =
            Product::create("123", "Product B", Money::from_dollars(10), ProductKind::B).unwrap();

        match product.take_events().as_slice() {
            [ProductEvent::ProductCreated(data)] => {
                assert_eq!(data.product_id.as_str(), "123");
                assert_eq!(data.price, Money::from_dollars(20));
            }
            other => panic!("Expected one ProductCreated event, got {other:?}"),
        }
    }
}
