use thiserror::Error;

/// Error type for hash and verify operations.
///
/// A wrong password is not an error; `verify` returns `Ok(false)`. These
/// variants cover operational failures only (RNG, malformed stored hash).
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
