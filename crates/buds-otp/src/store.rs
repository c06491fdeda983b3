//! Expiring credential store layered over the secure key-value port.
//!
//! Exactly one live numeric code per subject and one long-lived TOTP
//! secret per owner, surviving app restarts. Expiry is lazy: the read
//! that discovers a dead record deletes it. There is no background
//! sweeper.

use chrono::Duration;

use buds_domain::credential::StoredCode;

use crate::domain::repository::SecureStore;
use crate::error::OtpServiceError;

fn code_key(subject_key: &str) -> String {
    format!("verification_code:{subject_key}")
}

fn secret_key(owner_key: &str) -> String {
    format!("totp_secret:{owner_key}")
}

fn last_step_key(owner_key: &str) -> String {
    format!("totp_last_step:{owner_key}")
}

/// Keyed credential storage over a [`SecureStore`].
///
/// Operations on distinct subject/owner keys are independent; no
/// cross-key locking is required.
#[derive(Clone)]
pub struct CredentialStore<S: SecureStore> {
    pub store: S,
}

impl<S: SecureStore> CredentialStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stores a fresh code record, overwriting any existing entry for
    /// the subject (a resend invalidates the prior code).
    pub async fn put_code(
        &self,
        subject_key: &str,
        code: &str,
        ttl: Duration,
    ) -> Result<(), OtpServiceError> {
        let record = StoredCode::new(code.to_owned(), ttl);
        let json = serde_json::to_string(&record).map_err(OtpServiceError::storage)?;
        self.store.set(&code_key(subject_key), &json).await
    }

    /// The live record for a subject, if any. Expired or undecodable
    /// records are deleted and reported absent.
    pub async fn get_code(&self, subject_key: &str) -> Result<Option<StoredCode>, OtpServiceError> {
        let key = code_key(subject_key);
        let Some(json) = self.store.get(&key).await? else {
            return Ok(None);
        };
        match serde_json::from_str::<StoredCode>(&json) {
            Ok(record) if record.is_live() => Ok(Some(record)),
            Ok(_) => {
                self.store.delete(&key).await?;
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(error = %e, "undecodable code record, purging");
                self.store.delete(&key).await?;
                Ok(None)
            }
        }
    }

    /// Idempotent removal of a subject's code.
    pub async fn delete_code(&self, subject_key: &str) -> Result<(), OtpServiceError> {
        self.store.delete(&code_key(subject_key)).await
    }

    /// Stores an owner's TOTP secret. Secrets do not expire on their
    /// own; re-enrolling overwrites.
    pub async fn put_secret(
        &self,
        owner_key: &str,
        secret_b32: &str,
    ) -> Result<(), OtpServiceError> {
        self.store.set(&secret_key(owner_key), secret_b32).await
    }

    pub async fn get_secret(&self, owner_key: &str) -> Result<Option<String>, OtpServiceError> {
        self.store.get(&secret_key(owner_key)).await
    }

    /// Deleting the secret disables 2FA for the owner. Idempotent.
    pub async fn delete_secret(&self, owner_key: &str) -> Result<(), OtpServiceError> {
        self.store.delete(&secret_key(owner_key)).await
    }

    /// Records the last accepted TOTP step for the owner (replay guard).
    pub async fn put_last_step(&self, owner_key: &str, step: u64) -> Result<(), OtpServiceError> {
        self.store
            .set(&last_step_key(owner_key), &step.to_string())
            .await
    }

    /// The last accepted step, if one was recorded and still parses.
    pub async fn get_last_step(&self, owner_key: &str) -> Result<Option<u64>, OtpServiceError> {
        let Some(raw) = self.store.get(&last_step_key(owner_key)).await? else {
            return Ok(None);
        };
        Ok(raw.parse().ok())
    }

    pub async fn delete_last_step(&self, owner_key: &str) -> Result<(), OtpServiceError> {
        self.store.delete(&last_step_key(owner_key)).await
    }
}
