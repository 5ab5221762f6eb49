//! Product factory.

use common::EntityId;

use crate::value_objects::Money;

use super::{Product, ProductError, ProductKind};

/// Builds new products with generated IDs.
pub struct ProductFactory;

impl ProductFactory {
    /// Creates a product of the kind named by `kind` (`"a"` or `"b"`).
    pub fn create(
        kind: &str,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Product, ProductError> {
        let kind: ProductKind = kind.parse()?;
        Product::create(EntityId::generate(), name, price, kind)
    }
}
