//! Password hashing with argon2 (default parameters, random salt)

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use std::sync::LazyLock;

use crate::middleware::AuthError;

/// Stand-in digest verified when no user matches, so a miss costs the same
/// argon2 work as a wrong password
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("unknown-user-placeholder").ok());

/// Hash a plaintext password into a PHC string
pub fn hash_password(plaintext: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Verify a plaintext password against a stored PHC string.
///
/// A malformed stored hash verifies as false.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

/// Spend one verification on the stand-in digest. Always false.
pub fn verify_unknown_user(plaintext: &str) -> bool {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        verify_password(plaintext, hash);
    }
    false
}
