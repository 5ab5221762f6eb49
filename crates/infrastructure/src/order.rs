//! SQLite-backed order repository.

use async_trait::async_trait;
use common::EntityId;
use domain::{Money, Order, OrderItem};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, SqlitePool, Transaction};

use crate::{Repository, RepositoryError, Result};

const ENTITY: &str = "Order";

/// Order repository over the `orders` and `order_items` tables.
///
/// An order and its items are always written together in one transaction.
#[derive(Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new order repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn insert_items(tx: &mut Transaction<'_, Sqlite>, order: &Order) -> Result<()> {
        for (position, item) in order.items().iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO order_items (id, order_id, product_id, name, price, quantity, position)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(item.id().as_str())
            .bind(order.id().as_str())
            .bind(item.product_id().as_str())
            .bind(item.name())
            .bind(item.price().cents())
            .bind(item.quantity())
            .bind(position as i64)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    async fn load_items(&self, order_id: &EntityId) -> Result<Vec<OrderItem>> {
        let rows = sqlx::query(
            r#"
            SELECT id, product_id, name, price, quantity
            FROM order_items
            WHERE order_id = ?
            ORDER BY position ASC
            "#,
        )
        .bind(order_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| Self::row_to_item(order_id, row))
            .collect()
    }

    fn row_to_item(order_id: &EntityId, row: SqliteRow) -> Result<OrderItem> {
        OrderItem::new(
            row.try_get::<String, _>("id")?,
            row.try_get::<String, _>("product_id")?,
            row.try_get::<String, _>("name")?,
            Money::from_cents(row.try_get("price")?),
            row.try_get("quantity")?,
        )
        .map_err(|e| RepositoryError::invalid_row(ENTITY, order_id, e))
    }

    async fn row_to_order(&self, row: SqliteRow) -> Result<Order> {
        let id = EntityId::new(row.try_get::<String, _>("id")?);
        let customer_id: String = row.try_get("customer_id")?;
        let items = self.load_items(&id).await?;

        Order::new(id.clone(), customer_id, items)
            .map_err(|e| RepositoryError::invalid_row(ENTITY, &id, e))
    }
}

#[async_trait]
impl Repository<Order> for OrderRepository {
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id(), items = order.items().len()))]
    async fn create(&self, order: &Order) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES (?, ?, ?)")
            .bind(order.id().as_str())
            .bind(order.customer_id().as_str())
            .bind(order.total().cents())
            .execute(&mut *tx)
            .await?;

        Self::insert_items(&mut tx, order).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Rewrites the order row and replaces its items.
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id(), items = order.items().len()))]
    async fn update(&self, order: &Order) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE orders SET customer_id = ?, total = ? WHERE id = ?")
            .bind(order.customer_id().as_str())
            .bind(order.total().cents())
            .bind(order.id().as_str())
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                entity: ENTITY,
                id: order.id().clone(),
            });
        }

        sqlx::query("DELETE FROM order_items WHERE order_id = ?")
            .bind(order.id().as_str())
            .execute(&mut *tx)
            .await?;

        Self::insert_items(&mut tx, order).await?;

        tx.commit().await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, id: &EntityId) -> Result<Order> {
        let row = sqlx::query("SELECT id, customer_id FROM orders WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::NotFound {
                entity: ENTITY,
                id: id.clone(),
            })?;

        self.row_to_order(row).await
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query("SELECT id, customer_id FROM orders ORDER BY rowid ASC")
            .fetch_all(&self.pool)
            .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            orders.push(self.row_to_order(row).await?);
        }
        Ok(orders)
    }
}
