//! Order confirmation. Orders are acknowledged but never persisted,
//! so this is a plain struct rather than a trait over a store.

use tracing::info;
use uuid::Uuid;

use crate::models::order::{OrderConfirmation, OrderRequest};
use crate::models::user::PublicUser;

#[derive(Clone, Default)]
pub struct OrdersService;

impl OrdersService {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Acknowledges an order with a fresh confirmation ID. The caller
    /// identity is optional; anonymous orders are accepted.
    #[must_use]
    pub fn confirm(&self, order: &OrderRequest, user: Option<&PublicUser>) -> OrderConfirmation {
        let order_id = Uuid::new_v4().to_string();
        let actor = user.map_or("Anonymous", |u| u.login.as_str());

        info!(
            order_id = %order_id,
            customer = %actor,
            items = order.items.len(),
            total = order.total_price,
            "Order confirmed"
        );

        OrderConfirmation {
            message: "Your order is confirmed".to_string(),
            order_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::OrderItem;

    fn sample_order() -> OrderRequest {
        OrderRequest {
            items: vec![OrderItem {
                product_id: 1,
                size: "s".to_string(),
                additives: vec![],
                quantity: 1,
            }],
            total_price: 6.99,
        }
    }

    #[test]
    fn confirmations_carry_distinct_ids() {
        let svc = OrdersService::new();
        let a = svc.confirm(&sample_order(), None);
        let b = svc.confirm(&sample_order(), None);

        assert_eq!(a.message, "Your order is confirmed");
        assert_ne!(a.order_id, b.order_id);
        assert!(Uuid::parse_str(&a.order_id).is_ok());
    }
}
