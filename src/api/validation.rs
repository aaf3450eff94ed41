use super::ApiError;
use super::types::{LoginRequest, RegisterRequest};
use crate::models::order::OrderRequest;

const LOGIN_MIN_LEN: usize = 3;
const LOGIN_MAX_LEN: usize = 50;
const PASSWORD_MIN_LEN: usize = 6;

fn validate_login_format(login: &str) -> Result<(), ApiError> {
    if !(LOGIN_MIN_LEN..=LOGIN_MAX_LEN).contains(&login.len()) {
        return Err(ApiError::validation(format!(
            "Login must be between {} and {} characters",
            LOGIN_MIN_LEN, LOGIN_MAX_LEN
        )));
    }

    let mut chars = login.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    if !starts_with_letter || !chars.all(|c| c.is_ascii_alphanumeric()) {
        return Err(ApiError::validation(
            "Login must start with a letter and contain only letters and digits",
        ));
    }

    Ok(())
}

pub fn validate_register(req: &RegisterRequest) -> Result<(), ApiError> {
    validate_login_format(&req.login)?;

    if req.password.len() < PASSWORD_MIN_LEN {
        return Err(ApiError::validation(format!(
            "Password must be at least {} characters",
            PASSWORD_MIN_LEN
        )));
    }

    if req.confirm_password.len() < PASSWORD_MIN_LEN {
        return Err(ApiError::validation(format!(
            "Password confirmation must be at least {} characters",
            PASSWORD_MIN_LEN
        )));
    }

    if req.city.trim().is_empty() {
        return Err(ApiError::validation("City cannot be empty"));
    }

    if req.street.trim().is_empty() {
        return Err(ApiError::validation("Street cannot be empty"));
    }

    if req.house_number < 1 {
        return Err(ApiError::validation(format!(
            "Invalid house number: {}. House number must be a positive integer",
            req.house_number
        )));
    }

    Ok(())
}

pub fn validate_login_request(req: &LoginRequest) -> Result<(), ApiError> {
    if req.login.trim().is_empty() {
        return Err(ApiError::validation("Login cannot be empty"));
    }

    if req.password.is_empty() {
        return Err(ApiError::validation("Password cannot be empty"));
    }

    Ok(())
}

pub fn validate_order(order: &OrderRequest) -> Result<(), ApiError> {
    for item in &order.items {
        if item.quantity < 1 {
            return Err(ApiError::validation(format!(
                "Invalid quantity: {}. Quantity must be a positive integer",
                item.quantity
            )));
        }
    }

    if order.total_price < 0.0 {
        return Err(ApiError::validation(format!(
            "Invalid total price: {}. Total price cannot be negative",
            order.total_price
        )));
    }

    Ok(())
}

pub fn validate_product_id(id: i32) -> Result<i32, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid product ID: {}. ID must be a positive integer",
            id
        )));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::OrderItem;
    use crate::models::user::PaymentMethod;

    fn valid_register() -> RegisterRequest {
        RegisterRequest {
            login: "alice42".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            city: "Lisbon".to_string(),
            street: "Rua Augusta".to_string(),
            house_number: 12,
            payment_method: PaymentMethod::Card,
        }
    }

    #[test]
    fn test_validate_login_format() {
        assert!(validate_login_format("abc").is_ok());
        assert!(validate_login_format("a1b2c3").is_ok());
        assert!(validate_login_format("ab").is_err());
        assert!(validate_login_format(&"a".repeat(51)).is_err());
        assert!(validate_login_format("1abc").is_err());
        assert!(validate_login_format("ab_c").is_err());
        assert!(validate_login_format("ab c").is_err());
    }

    #[test]
    fn test_validate_register() {
        assert!(validate_register(&valid_register()).is_ok());

        let mut short_password = valid_register();
        short_password.password = "abc".to_string();
        assert!(validate_register(&short_password).is_err());

        let mut empty_city = valid_register();
        empty_city.city = "  ".to_string();
        assert!(validate_register(&empty_city).is_err());

        let mut bad_house = valid_register();
        bad_house.house_number = 0;
        assert!(validate_register(&bad_house).is_err());
    }

    #[test]
    fn test_validate_order() {
        let order = OrderRequest {
            items: vec![OrderItem {
                product_id: 1,
                size: "s".to_string(),
                additives: vec![],
                quantity: 2,
            }],
            total_price: 13.98,
        };
        assert!(validate_order(&order).is_ok());

        let mut zero_quantity = OrderRequest {
            items: order.items.clone(),
            total_price: order.total_price,
        };
        zero_quantity.items[0].quantity = 0;
        assert!(validate_order(&zero_quantity).is_err());

        let negative_total = OrderRequest {
            items: order.items.clone(),
            total_price: -0.01,
        };
        assert!(validate_order(&negative_total).is_err());

        let empty_order = OrderRequest {
            items: vec![],
            total_price: 0.0,
        };
        assert!(validate_order(&empty_order).is_ok());
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id(1).is_ok());
        assert!(validate_product_id(0).is_err());
        assert!(validate_product_id(-5).is_err());
    }
}
