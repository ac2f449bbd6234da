//! Request validation: required-field presence on typed request bodies.

use crate::error::AppError;

pub struct RequestValidator;

impl RequestValidator {
    /// A field is present when its key exists and is not `null`.
    pub fn require<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
        value.ok_or_else(|| AppError::BadRequest(format!("{} is required", field)))
    }

    /// Parse a `:id` path segment as an integer primary key.
    pub fn parse_id(id_str: &str) -> Result<i64, AppError> {
        id_str
            .parse()
            .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
    }
}
