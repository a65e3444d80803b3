//! Argon2 password hashing.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};

use crate::error::{HrmsError, HrmsResult};

/// Hash a password using default Argon2 settings and a random salt.
pub fn hash_password(password: &str) -> HrmsResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| HrmsError::Credential {
            message: e.to_string(),
        })
}

/// Hash a password on tokio's blocking pool.
///
/// Argon2 is CPU-bound; request handlers call this instead of
/// [`hash_password`] so the async workers keep serving.
pub async fn hash_password_blocking(password: String) -> HrmsResult<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| HrmsError::Credential {
            message: format!("hashing task failed: {}", e),
        })?
}

/// Verify a password against a stored PHC-format hash.
pub fn verify_password(password: &str, hash: &str) -> HrmsResult<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| HrmsError::Credential {
        message: e.to_string(),
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
