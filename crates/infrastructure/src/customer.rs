//! SQLite-backed customer repository.

use async_trait::async_trait;
use common::EntityId;
use domain::{Address, Customer, Money};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::{Repository, RepositoryError, Result};

const ENTITY: &str = "Customer";

/// Customer repository over the `customers` table.
#[derive(Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new customer repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_customer(row: SqliteRow) -> Result<Customer> {
        let id = EntityId::new(row.try_get::<String, _>("id")?);

        let street: Option<String> = row.try_get("street")?;
        let number: Option<u32> = row.try_get("number")?;
        let zip: Option<String> = row.try_get("zipcode")?;
        let city: Option<String> = row.try_get("city")?;
        let address = match (street, number, zip, city) {
            (Some(street), Some(number), Some(zip), Some(city)) => {
                Some(Address::new(street, number, zip, city))
            }
            _ => None,
        };

        Customer::restore(
            id.clone(),
            row.try_get::<String, _>("name")?,
            address,
            row.try_get("active")?,
            Money::from_cents(row.try_get("reward_points")?),
        )
        .map_err(|e| RepositoryError::invalid_row(ENTITY, &id, e))
    }
}

#[async_trait]
impl Repository<Customer> for CustomerRepository {
    #[tracing::instrument(skip(self, customer), fields(customer_id = %customer.id()))]
    async fn create(&self, customer: &Customer) -> Result<()> {
        let address = customer.address();

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, street, number, zipcode, city, active, reward_points)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(customer.id().as_str())
        .bind(customer.name())
        .bind(address.map(Address::street))
        .bind(address.map(Address::number))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(customer.is_active())
        .bind(customer.reward_points().cents())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self, customer), fields(customer_id = %customer.id()))]
    async fn update(&self, customer: &Customer) -> Result<()> {
        let address = customer.address();

        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = ?, street = ?, number = ?, zipcode = ?, city = ?, active = ?, reward_points = ?
            WHERE id = ?
            "#,
        )
        .bind(customer.name())
        .bind(address.map(Address::street))
        .bind(address.map(Address::number))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(customer.is_active())
        .bind(customer.reward_points().cents())
        .bind(customer.id().as_str())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                entity: ENTITY,
                id: customer.id().clone(),
            });
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, id: &EntityId) -> Result<Customer> {
        let row = sqlx::query(
            r#"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::NotFound {
            entity: ENTITY,
            id: id.clone(),
        })?;

        Self::row_to_customer(row)
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Customer>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            ORDER BY rowid ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_customer).collect()
    }
}
