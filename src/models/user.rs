use crate::error::AppError;
use crate::service::RequestValidator;
use serde::{Deserialize, Serialize};

/// A stored user. `password` holds the Argon2 PHC hash string, never plaintext.
/// Serializes to `{id, firstName, lastName, email, password}`.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /register`.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `POST /login`.
#[derive(Default, Deserialize)]
pub struct LoginPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Registration fields with the plaintext password still unhashed.
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn from_payload(payload: RegisterPayload) -> Result<Self, AppError> {
        Ok(NewUser {
            first_name: RequestValidator::require("firstName", payload.first_name)?,
            last_name: RequestValidator::require("lastName", payload.last_name)?,
            email: RequestValidator::require("email", payload.email)?,
            password: RequestValidator::require("password", payload.password)?,
        })
    }
}

impl Credentials {
    pub fn from_payload(payload: LoginPayload) -> Result<Self, AppError> {
        Ok(Credentials {
            email: RequestValidator::require("email", payload.email)?,
            password: RequestValidator::require("password", payload.password)?,
        })
    }
}

// Plaintext must not end up in logs through a derived Debug.
impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").field("email", &self.email).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_camel_case_keys() {
        let user = User {
            id: 7,
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@b.com".into(),
            password: "$argon2id$...".into(),
        };
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({"id": 7, "firstName": "A", "lastName": "B", "email": "a@b.com", "password": "$argon2id$..."})
        );
    }

    #[test]
    fn register_payload_reads_camel_case() {
        let payload: RegisterPayload = serde_json::from_value(
            json!({"firstName": "A", "lastName": "B", "email": "a@b.com", "password": "pw123"}),
        )
        .unwrap();
        let new = NewUser::from_payload(payload).unwrap();
        assert_eq!(new.first_name, "A");
        assert_eq!(new.last_name, "B");
        assert!(!format!("{:?}", new).contains("pw123"));
    }

    #[test]
    fn snake_case_register_keys_count_as_missing() {
        let payload: RegisterPayload = serde_json::from_value(
            json!({"first_name": "A", "lastName": "B", "email": "a@b.com", "password": "pw"}),
        )
        .unwrap();
        let err = NewUser::from_payload(payload).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "firstName is required"));
    }

    #[test]
    fn login_requires_both_fields() {
        let err = Credentials::from_payload(LoginPayload {
            email: Some("a@b.com".into()),
            password: None,
        })
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m == "password is required"));
    }
}
