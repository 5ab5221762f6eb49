//! Wiring for the demo binary.
//!
//! Builds the event dispatchers with the sample handlers, opens the
//! repositories, and runs a small shopping scenario end to end.

pub mod config;

use std::sync::Arc;

use common::EntityId;
use domain::{
    Address, CustomerAddressChangedLogHandler, CustomerEvent, CustomerFactory, DomainError,
    EventDispatcher, FirstCustomerCreatedLogHandler, Money, OrderItem, OrderService,
    ProductEvent, ProductFactory, SecondCustomerCreatedLogHandler,
    SendEmailWhenProductIsCreatedHandler,
};
use infrastructure::{
    CustomerRepository, OrderRepository, ProductRepository, Repository, RepositoryError,
    SqlitePool,
};
use thiserror::Error;

pub use config::Config;

/// Errors that can abort the demo scenario.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// One dispatcher per event family.
#[derive(Debug, Default)]
pub struct Dispatchers {
    pub customers: EventDispatcher<CustomerEvent>,
    pub products: EventDispatcher<ProductEvent>,
}

/// Creates dispatchers with every sample handler registered.
pub fn create_dispatchers(config: &Config) -> Dispatchers {
    let mut dispatchers = Dispatchers::default();

    dispatchers
        .customers
        .register(CustomerEvent::CREATED, Arc::new(FirstCustomerCreatedLogHandler));
    dispatchers
        .customers
        .register(CustomerEvent::CREATED, Arc::new(SecondCustomerCreatedLogHandler));
    dispatchers.customers.register(
        CustomerEvent::ADDRESS_CHANGED,
        Arc::new(CustomerAddressChangedLogHandler),
    );
    dispatchers.products.register(
        ProductEvent::CREATED,
        Arc::new(SendEmailWhenProductIsCreatedHandler::new(
            &config.product_notification_email,
        )),
    );

    dispatchers
}

/// Repositories sharing one connection pool.
#[derive(Clone)]
pub struct Repositories {
    pub customers: CustomerRepository,
    pub products: ProductRepository,
    pub orders: OrderRepository,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            customers: CustomerRepository::new(pool.clone()),
            products: ProductRepository::new(pool.clone()),
            orders: OrderRepository::new(pool),
        }
    }
}

/// Outcome of [`run_demo`].
#[derive(Debug, Clone)]
pub struct DemoSummary {
    pub customer_id: EntityId,
    pub order_id: EntityId,
    pub order_total: Money,
    pub reward_points: Money,
}

/// Runs the shopping scenario against the configured database.
///
/// Entities are persisted before their recorded events are dispatched.
#[tracing::instrument(skip_all)]
pub async fn run_demo(config: &Config) -> Result<DemoSummary, AppError> {
    let pool = infrastructure::connect(&config.database).await?;
    infrastructure::run_migrations(&pool).await?;

    let dispatchers = create_dispatchers(config);
    let repositories = Repositories::new(pool);

    let mut customer = CustomerFactory::create_with_address(
        "Customer 1",
        Address::new("Street 1", 1, "13330-250", "São Paulo"),
    )
    .map_err(DomainError::from)?;
    customer.activate().map_err(DomainError::from)?;
    repositories.customers.create(&customer).await?;
    dispatchers
        .customers
        .notify_all(&customer.take_events())
        .map_err(DomainError::from)?;

    let mut products = vec![
        ProductFactory::create("a", "Keyboard", Money::from_dollars(40)).map_err(DomainError::from)?,
        ProductFactory::create("b", "Mouse", Money::from_dollars(15)).map_err(DomainError::from)?,
    ];
    for product in &mut products {
        repositories.products.create(product).await?;
        dispatchers
            .products
            .notify_all(&product.take_events())
            .map_err(DomainError::from)?;
    }

    customer.change_address(Address::new("Street 2", 2, "87654321", "City 2"));
    repositories.customers.update(&customer).await?;
    dispatchers
        .customers
        .notify_all(&customer.take_events())
        .map_err(DomainError::from)?;

    let items = products
        .iter()
        .map(|product| {
            OrderItem::new(
                EntityId::generate(),
                product.id().clone(),
                product.name(),
                product.price(),
                1,
            )
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(DomainError::from)?;
    let order = OrderService::place_order(&mut customer, items).map_err(DomainError::from)?;
    repositories.orders.create(&order).await?;
    repositories.customers.update(&customer).await?;

    Ok(DemoSummary {
        customer_id: customer.id().clone(),
        order_id: order.id().clone(),
        order_total: order.total(),
        reward_points: customer.reward_points(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatchers_have_sample_handlers() {
        let dispatchers = create_dispatchers(&Config::default());

        assert_eq!(
            dispatchers.customers.handlers_for(CustomerEvent::CREATED).map(|h| h.len()),
            Some(2)
        );
        assert_eq!(
            dispatchers
                .customers
                .handlers_for(CustomerEvent::ADDRESS_CHANGED)
                .map(|h| h.len()),
            Some(1)
        );
        assert_eq!(
            dispatchers.products.handlers_for(ProductEvent::CREATED).map(|h| h.len()),
            Some(1)
        );
    }

    #[tokio::test]
    async fn test_run_demo_places_order() {
        let summary = run_demo(&Config::default()).await.unwrap();

        // Keyboard $40 (kind a) + Mouse $15 doubled (kind b).
        assert_eq!(summary.order_total, Money::from_dollars(70));
        assert_eq!(summary.reward_points, Money::from_dollars(35));
        assert_ne!(summary.customer_id, summary.order_id);
    }
}
