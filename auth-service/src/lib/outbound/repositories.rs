pub mod credentials;

pub use credentials::SqliteCredentialRepository;
