//! Product pricing service.

use super::{Product, ProductError};

/// Operations spanning several products.
pub struct ProductService;

impl ProductService {
    /// Raises the base price of every product by `percentage` percent.
    #[tracing::instrument(skip(products), fields(count = products.len()))]
    pub fn increase_price(products: &mut [Product], percentage: f64) -> Result<(), ProductError> {
        for product in products.iter_mut() {
            let increase = product.base_price().percentage(percentage);
            product.change_price(product.base_price() + increase)?;
        }
        Ok(())
    }
}
