//! Password hashing library
//!
//! Wraps Argon2id salted hashing behind a small hash/verify API so the
//! service never handles salts or algorithm parameters directly. Hashes are
//! PHC strings: algorithm, cost parameters, and per-call random salt are all
//! embedded, so `verify` needs nothing but the stored string.
//!
//! # Examples
//!
//! ```
//! use password::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("not_my_password", &hash).unwrap());
//! ```

pub mod argon2;
pub mod errors;

pub use argon2::PasswordHasher;
pub use errors::PasswordError;
