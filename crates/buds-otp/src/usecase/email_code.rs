use chrono::Duration;

use buds_domain::credential::is_well_formed_code;
use buds_domain::outcome::VerifyOutcome;

use crate::domain::repository::{Mailer, SecureStore};
use crate::error::OtpServiceError;
use crate::generate;
use crate::store::CredentialStore;

// ── SendEmailCode ─────────────────────────────────────────────────────────────

pub struct SendEmailCodeInput {
    pub email: String,
}

pub struct SendEmailCodeUseCase<S, M>
where
    S: SecureStore,
    M: Mailer,
{
    pub credentials: CredentialStore<S>,
    pub mailer: M,
    /// TTL applied to every issued code.
    pub code_ttl: Duration,
}

impl<S, M> SendEmailCodeUseCase<S, M>
where
    S: SecureStore,
    M: Mailer,
{
    /// Generates a fresh code, stores it (replacing any prior code for
    /// this address), then delegates delivery to the mailer port.
    ///
    /// The code is stored before the send so a delivery failure leaves a
    /// retryable state; the next send simply overwrites.
    pub async fn execute(&self, input: SendEmailCodeInput) -> Result<(), OtpServiceError> {
        let code = generate::numeric_code();
        self.credentials
            .put_code(&input.email, &code, self.code_ttl)
            .await?;
        self.mailer.send_code(&input.email, &code).await?;
        tracing::debug!(email = %input.email, "verification code issued");
        Ok(())
    }
}

// ── PeekEmailCode ─────────────────────────────────────────────────────────────

/// Reads the live code for a subject without consuming it. Development
/// helper: demo builds surface the code in-app instead of emailing it.
pub struct PeekEmailCodeUseCase<S>
where
    S: SecureStore,
{
    pub credentials: CredentialStore<S>,
}

impl<S> PeekEmailCodeUseCase<S>
where
    S: SecureStore,
{
    pub async fn execute(&self, email: &str) -> Result<Option<String>, OtpServiceError> {
        Ok(self.credentials.get_code(email).await?.map(|r| r.code))
    }
}

// ── VerifyEmailCode ───────────────────────────────────────────────────────────

pub struct VerifyEmailCodeInput {
    pub email: String,
    pub code: String,
}

pub struct VerifyEmailCodeUseCase<S>
where
    S: SecureStore,
{
    pub credentials: CredentialStore<S>,
}

impl<S> VerifyEmailCodeUseCase<S>
where
    S: SecureStore,
{
    /// Single-use check: the record is consumed before success is
    /// reported. A mismatch leaves the record intact for further
    /// attempts until it expires. Absent and expired records are
    /// indistinguishable in the outcome.
    pub async fn execute(
        &self,
        input: VerifyEmailCodeInput,
    ) -> Result<VerifyOutcome, OtpServiceError> {
        if !is_well_formed_code(&input.code) {
            return Ok(VerifyOutcome::InvalidFormat);
        }

        let Some(record) = self.credentials.get_code(&input.email).await? else {
            return Ok(VerifyOutcome::NotFoundOrExpired);
        };

        // Exact string equality: codes are numeric, nothing to case-fold.
        if record.code != input.code {
            tracing::debug!(email = %input.email, "verification code mismatch");
            return Ok(VerifyOutcome::Mismatch);
        }

        self.credentials.delete_code(&input.email).await?;
        tracing::debug!(email = %input.email, "verification code accepted");
        Ok(VerifyOutcome::Verified)
    }
}
