//! Order request and confirmation shapes.

use serde::{Deserialize, Serialize};

/// Single line of an order as submitted by a client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderItem {
    pub product_id: i32,
    pub size: String,
    #[serde(default)]
    pub additives: Vec<String>,
    pub quantity: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderRequest {
    pub items: Vec<OrderItem>,
    pub total_price: f64,
}

/// Returned on successful order submission. No order record is stored;
/// the ID exists only so clients can reference the confirmation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub message: String,
    pub order_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_request_parses_camel_case() {
        let body = r#"{
            "items": [
                {"productId": 3, "size": "m", "additives": ["Cinnamon"], "quantity": 2}
            ],
            "totalPrice": 13.98
        }"#;

        let req: OrderRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.items.len(), 1);
        assert_eq!(req.items[0].product_id, 3);
        assert_eq!(req.items[0].quantity, 2);
        assert!((req.total_price - 13.98).abs() < f64::EPSILON);
    }

    #[test]
    fn order_request_rejects_unknown_fields() {
        let body = r#"{"items": [], "totalPrice": 0, "coupon": "FREE"}"#;
        assert!(serde_json::from_str::<OrderRequest>(body).is_err());
    }

    #[test]
    fn order_item_additives_default_to_empty() {
        let body = r#"{"productId": 1, "size": "s", "quantity": 1}"#;
        let item: OrderItem = serde_json::from_str(body).unwrap();
        assert!(item.additives.is_empty());
    }
}
