use serde::Serialize;

use crate::entities::users;
pub use crate::entities::users::PaymentMethod;

/// User shape safe to put on the wire. The password hash is dropped at
/// this boundary and never serialized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: i32,
    pub login: String,
    pub city: String,
    pub street: String,
    pub house_number: i32,
    pub payment_method: PaymentMethod,
    pub created_at: String,
}

impl From<users::Model> for PublicUser {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            login: model.login,
            city: model.city,
            street: model.street,
            house_number: model.house_number,
            payment_method: model.payment_method,
            created_at: model.created_at,
        }
    }
}
