//! SQLite-backed product repository.

use async_trait::async_trait;
use common::EntityId;
use domain::{Money, Product, ProductKind};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::{Repository, RepositoryError, Result};

const ENTITY: &str = "Product";

/// Product repository over the `products` table.
///
/// The base price is stored; the selling price is derived from the kind.
#[derive(Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new product repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_product(row: SqliteRow) -> Result<Product> {
        let id = EntityId::new(row.try_get::<String, _>("id")?);
        let name: String = row.try_get("name")?;
        let price: i64 = row.try_get("price")?;
        let kind: String = row.try_get("kind")?;

        kind.parse::<ProductKind>()
            .and_then(|kind| Product::with_kind(id.clone(), name, Money::from_cents(price), kind))
            .map_err(|e| RepositoryError::invalid_row(ENTITY, &id, e))
    }
}

#[async_trait]
impl Repository<Product> for ProductRepository {
    #[tracing::instrument(skip(self, product), fields(product_id = %product.id()))]
    async fn create(&self, product: &Product) -> Result<()> {
        sqlx::query("INSERT INTO products (id, name, price, kind) VALUES (?, ?, ?, ?)")
            .bind(product.id().as_str())
            .bind(product.name())
            .bind(product.base_price().cents())
            .bind(product.kind().as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self, product), fields(product_id = %product.id()))]
    async fn update(&self, product: &Product) -> Result<()> {
        let result = sqlx::query("UPDATE products SET name = ?, price = ?, kind = ? WHERE id = ?")
            .bind(product.name())
            .bind(product.base_price().cents())
            .bind(product.kind().as_str())
            .bind(product.id().as_str())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                entity: ENTITY,
                id: product.id().clone(),
            });
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, id: &EntityId) -> Result<Product> {
        let row = sqlx::query("SELECT id, name, price, kind FROM products WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::NotFound {
                entity: ENTITY,
                id: id.clone(),
            })?;

        Self::row_to_product(row)
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query("SELECT id, name, price, kind FROM products ORDER BY rowid ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::row_to_product).collect()
    }
}
