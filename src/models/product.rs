use crate::error::AppError;
use crate::service::RequestValidator;
use serde::{Deserialize, Serialize};

/// A stored product. Serializes to exactly `{id, name, desc, price, qty}`.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub desc: String,
    pub price: f64,
    pub qty: i64,
}

/// Body of `POST /products` and `PUT /products/:id`. Every field is required;
/// they are optional here so a missing key becomes a `BadRequest` naming it.
#[derive(Debug, Default, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub price: Option<f64>,
    pub qty: Option<i64>,
}

/// Field values for a product write (insert or full overwrite).
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub desc: String,
    pub price: f64,
    pub qty: i64,
}

impl NewProduct {
    pub fn from_payload(payload: ProductPayload) -> Result<Self, AppError> {
        Ok(NewProduct {
            name: RequestValidator::require("name", payload.name)?,
            desc: RequestValidator::require("desc", payload.desc)?,
            price: RequestValidator::require("price", payload.price)?,
            qty: RequestValidator::require("qty", payload.qty)?,
        })
    }

    pub fn with_id(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            desc: self.desc,
            price: self.price,
            qty: self.qty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_whitelisted_fields_only() {
        let product = Product {
            id: 1,
            name: "Widget".into(),
            desc: "A widget".into(),
            price: 9.99,
            qty: 10,
        };
        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({"id": 1, "name": "Widget", "desc": "A widget", "price": 9.99, "qty": 10})
        );
    }

    #[test]
    fn payload_with_every_field_builds() {
        let payload: ProductPayload =
            serde_json::from_value(json!({"name": "Widget", "desc": "A widget", "price": 9.99, "qty": 10, "extra": true}))
                .unwrap();
        let new = NewProduct::from_payload(payload).unwrap();
        assert_eq!(new.clone().with_id(4).id, 4);
        assert_eq!(new.name, "Widget");
        assert_eq!(new.qty, 10);
    }

    #[test]
    fn missing_or_null_field_is_bad_request() {
        let payload: ProductPayload =
            serde_json::from_value(json!({"name": "Widget", "desc": null, "price": 1.0, "qty": 1})).unwrap();
        let err = NewProduct::from_payload(payload).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "desc is required"));

        let err = NewProduct::from_payload(ProductPayload::default()).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "name is required"));
    }

    #[test]
    fn integer_price_is_accepted() {
        let payload: ProductPayload =
            serde_json::from_value(json!({"name": "Bolt", "desc": "", "price": 3, "qty": 0})).unwrap();
        assert_eq!(NewProduct::from_payload(payload).unwrap().price, 3.0);
    }
}
