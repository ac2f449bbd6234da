//! Argon2id password hashing. Hashes are PHC strings carrying their own salt.

use crate::error::AppError;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::sync::OnceLock;

static DUMMY_HASH: OnceLock<String> = OnceLock::new();

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("password hashing failed: {}", e)))
}

/// Constant-time check of `password` against a stored hash. A stored value
/// that is not a PHC string is an internal error, not a mismatch.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("stored password hash unreadable: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// A real Argon2 hash of a throwaway secret, with the same parameters as stored
/// hashes. Computed once, on first use.
pub(crate) fn dummy_hash() -> Result<&'static str, AppError> {
    if let Some(hash) = DUMMY_HASH.get() {
        return Ok(hash);
    }
    let hash = hash_password("catalogue-api:no-such-user")?;
    Ok(DUMMY_HASH.get_or_init(|| hash))
}

/// Runs [`hash_password`] on the blocking pool.
pub async fn hash_password_blocking(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(format!("hashing task failed: {}", e)))?
}

/// Runs [`verify_password`] on the blocking pool.
pub async fn verify_password_blocking(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("verification task failed: {}", e)))?
}

/// Verifies `password` against [`dummy_hash`] on the blocking pool, so a lookup
/// miss costs the same Argon2 work as a wrong password. Always `false`.
pub async fn verify_dummy_blocking(password: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || {
        let hash = dummy_hash()?;
        verify_password(&password, hash).map(|_| false)
    })
    .await
    .map_err(|e| AppError::Internal(format!("verification task failed: {}", e)))?
}
