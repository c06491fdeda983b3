//! `SecureStore` doubles.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use buds_otp::domain::repository::SecureStore;
use buds_otp::error::OtpServiceError;

// ── MemorySecureStore ─────────────────────────────────────────────────────────

/// In-memory secure store. Per-call atomicity comes from the mutex;
/// nothing survives the process, which is exactly what tests want.
#[derive(Clone, Default)]
pub struct MemorySecureStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySecureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the raw entries for post-execution inspection.
    pub fn entries_handle(&self) -> Arc<Mutex<HashMap<String, String>>> {
        Arc::clone(&self.entries)
    }

    /// Plants a raw value under a key, bypassing the store API. For
    /// corrupt-record tests.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
    }
}

impl SecureStore for MemorySecureStore {
    async fn get(&self, key: &str) -> Result<Option<String>, OtpServiceError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), OtpServiceError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), OtpServiceError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

// ── FailingSecureStore ────────────────────────────────────────────────────────

/// Store whose every operation fails, for exercising the
/// `STORAGE_FAILURE` paths.
#[derive(Clone, Copy, Default)]
pub struct FailingSecureStore;

impl SecureStore for FailingSecureStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, OtpServiceError> {
        Err(OtpServiceError::Storage(anyhow::anyhow!(
            "injected store failure"
        )))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), OtpServiceError> {
        Err(OtpServiceError::Storage(anyhow::anyhow!(
            "injected store failure"
        )))
    }

    async fn delete(&self, _key: &str) -> Result<(), OtpServiceError> {
        Err(OtpServiceError::Storage(anyhow::anyhow!(
            "injected store failure"
        )))
    }
}
