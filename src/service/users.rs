//! User persistence and the register/login flows.

use crate::error::AppError;
use crate::models::{Credentials, NewUser, User};
use crate::service::password::{hash_password_blocking, verify_dummy_blocking, verify_password_blocking};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, first_name, last_name, email, password";

/// Shown for both unknown email and wrong password.
pub const LOGIN_FAILED: &str = "invalid email or password";

pub struct UserService;

impl UserService {
    /// Hash the plaintext password, insert, and return the stored row (hash included).
    pub async fn register(pool: &SqlitePool, new: NewUser) -> Result<User, AppError> {
        let hash = hash_password_blocking(new.password).await?;
        let sql = format!(
            r#"INSERT INTO "user" (first_name, last_name, email, password) VALUES (?, ?, ?, ?) RETURNING {}"#,
            COLUMNS
        );
        tracing::debug!(sql = %sql, email = %new.email, "query");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(&new.first_name)
            .bind(&new.last_name)
            .bind(&new.email)
            .bind(&hash)
            .fetch_one(pool)
            .await
            .map_err(|e| AppError::from_write(e, "user"))?;
        tracing::info!(id = user.id, "user registered");
        Ok(user)
    }

    /// First user (lowest id) registered with `email`.
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, AppError> {
        let sql = format!(r#"SELECT {} FROM "user" WHERE email = ? ORDER BY id LIMIT 1"#, COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Return the matching user, or `Unauthorized` with the same message whether
    /// the email is unknown or the password wrong. Both failures run one Argon2 verify.
    pub async fn login(pool: &SqlitePool, credentials: Credentials) -> Result<User, AppError> {
        let Some(user) = Self::find_by_email(pool, &credentials.email).await? else {
            verify_dummy_blocking(credentials.password).await?;
            tracing::info!("login failed: unknown email");
            return Err(AppError::Unauthorized(LOGIN_FAILED.into()));
        };
        if !verify_password_blocking(credentials.password, user.password.clone()).await? {
            tracing::info!(id = user.id, "login failed: wrong password");
            return Err(AppError::Unauthorized(LOGIN_FAILED.into()));
        }
        tracing::info!(id = user.id, "login succeeded");
        Ok(user)
    }
}
