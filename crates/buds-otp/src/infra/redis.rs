use deadpool_redis::Pool;
use deadpool_redis::redis::AsyncCommands;

use crate::domain::repository::SecureStore;
use crate::error::OtpServiceError;

/// Secure-store adapter backed by Redis.
///
/// Plain GET/SET/DEL, no `EX`: record expiry belongs to
/// [`crate::store::CredentialStore`], so the same records behave
/// identically on backends with no native TTL support.
#[derive(Clone)]
pub struct RedisSecureStore {
    pub pool: Pool,
}

impl SecureStore for RedisSecureStore {
    async fn get(&self, key: &str) -> Result<Option<String>, OtpServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| OtpServiceError::Storage(e.into()))?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| OtpServiceError::Storage(e.into()))?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), OtpServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| OtpServiceError::Storage(e.into()))?;
        let (): () = conn
            .set(key, value)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| OtpServiceError::Storage(e.into()))?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), OtpServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| OtpServiceError::Storage(e.into()))?;
        let (): () = conn
            .del(key)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| OtpServiceError::Storage(e.into()))?;
        Ok(())
    }
}
