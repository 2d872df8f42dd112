use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, SaltString},
    Argon2, PasswordVerifier,
};
use once_cell::sync::Lazy;

#[derive(Debug, thiserror::Error)]
#[error("Password hashing failed: {0}")]
pub struct HashError(pub String);

/// Hashing capability used by the auth flow.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, HashError>;
    fn verify(&self, password: &str, digest: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| HashError(e.to_string()))
    }

    fn verify(&self, password: &str, digest: &str) -> bool {
        if let Ok(parsed_hash) = PasswordHash::new(digest) {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok()
        } else {
            false
        }
    }
}

/// Hash checked against when a login names an unknown user, so that path
/// does the same amount of work as a wrong password.
pub static DUMMY_HASH: Lazy<Option<String>> =
    Lazy::new(|| Argon2Hasher.hash("salesboard-placeholder-password").ok());
