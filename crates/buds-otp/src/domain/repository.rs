#![allow(async_fn_in_trait)]

use crate::error::OtpServiceError;

/// Port for the secure, process-surviving key-value store that holds
/// live credentials.
///
/// Implementations must make each call atomic per key (no partial read
/// of a half-written record); nothing is required across distinct keys.
/// All operations touch durable storage and may fail with I/O errors.
pub trait SecureStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, OtpServiceError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), OtpServiceError>;

    /// Idempotent: deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), OtpServiceError>;
}

/// Port for one-time-code delivery.
///
/// The core only generates and records the code before delegating here;
/// message formatting and transport belong to the implementor.
pub trait Mailer: Send + Sync {
    async fn send_code(&self, recipient: &str, code: &str) -> Result<(), OtpServiceError>;
}
