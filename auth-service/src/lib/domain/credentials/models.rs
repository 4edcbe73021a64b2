use std::fmt;

use crate::credentials::errors::UsernameError;

/// Credential aggregate entity.
///
/// One row of the credential store: a unique username paired with the
/// Argon2 hash of its password. The hash is produced only by the
/// `password` crate; plaintext is never stored.
#[derive(Debug, Clone)]
pub struct Credential {
    pub username: Username,
    pub password_hash: String,
}

/// Username value type
///
/// Ensures a username is non-empty (after trimming). The store enforces
/// uniqueness; this type only guards shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new valid username.
    ///
    /// # Arguments
    /// * `username` - Raw username string
    ///
    /// # Returns
    /// Validated Username value object
    ///
    /// # Errors
    /// * `Empty` - Username is empty or whitespace-only
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.trim().is_empty() {
            Err(UsernameError::Empty)
        } else {
            Ok(Self(username))
        }
    }

    /// Get username as string slice.
    ///
    /// # Returns
    /// Username string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new credential with domain types
#[derive(Debug)]
pub struct SignupCommand {
    pub username: Username,
    pub password: String,
}

impl SignupCommand {
    /// Construct a new signup command.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `password` - Plain text password (will be hashed by service)
    ///
    /// # Returns
    /// SignupCommand with validated fields
    pub fn new(username: Username, password: String) -> Self {
        Self { username, password }
    }
}
