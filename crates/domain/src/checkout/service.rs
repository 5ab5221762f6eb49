//! Order placement service.

use common::EntityId;

use crate::customer::Customer;
use crate::value_objects::Money;

use super::{Order, OrderError, OrderItem};

/// Operations spanning orders and customers.
pub struct OrderService;

impl OrderService {
    /// Returns the combined total of several orders.
    pub fn total(orders: &[Order]) -> Money {
        orders.iter().map(Order::total).sum()
    }

    /// Places a new order for `customer` and credits half of its total as
    /// reward points.
    #[tracing::instrument(skip(customer, items), fields(customer_id = %customer.id()))]
    pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> Result<Order, OrderError> {
        if items.is_empty() {
            return Err(OrderError::NoItems);
        }

        let order = Order::new(EntityId::generate(), customer.id().clone(), items)?;
        customer.add_reward_points(order.total().half());

        tracing::info!(order_id = %order.id(), total = %order.total(), "order placed");

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: i64, quantity: u32) -> OrderItem {
        OrderItem::new(id, "p1", format!("Item {id}"), Money::from_dollars(price), quantity).unwrap()
    }

    #[test]
    fn test_place_order_credits_reward_points() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();

        let order = OrderService::place_order(&mut customer, vec![item("i1", 10, 1)]).unwrap();

        assert_eq!(customer.reward_points(), Money::from_dollars(5));
        assert_eq!(order.total(), Money::from_dollars(10));
        assert_eq!(order.customer_id(), customer.id());
    }

    #[test]
    fn test_place_order_without_items_fails() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();

        let err = OrderService::place_order(&mut customer, vec![]).unwrap_err();

        assert_eq!(err, OrderError::NoItems);
        assert_eq!(customer.reward_points(), Money::zero());
    }

    #[test]
    fn test_total_of_all_orders() {
        let order1 = Order::new("o1", "c1", vec![item("i1", 100, 1)]).unwrap();
        let order2 = Order::new("o2", "c1", vec![item("i2", 200, 2)]).unwrap();

        assert_eq!(OrderService::total(&[order1, order2]), Money::from_dollars(500));
    }
}
