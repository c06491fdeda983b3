use buds_domain::credential::is_well_formed_code;
use buds_domain::outcome::VerifyOutcome;

use crate::domain::repository::SecureStore;
use crate::error::OtpServiceError;
use crate::generate;
use crate::store::CredentialStore;
use crate::totp;

// ── EnrollTotp ────────────────────────────────────────────────────────────────

pub struct EnrollTotpInput {
    pub user_id: String,
    /// Account label shown in the authenticator app, usually the email.
    pub account_label: String,
}

pub struct EnrollTotpOutput {
    pub secret_b32: String,
    pub provisioning_uri: String,
}

pub struct EnrollTotpUseCase<S>
where
    S: SecureStore,
{
    pub credentials: CredentialStore<S>,
    /// Issuer label embedded in the provisioning URI.
    pub issuer: String,
}

impl<S> EnrollTotpUseCase<S>
where
    S: SecureStore,
{
    /// Generates and stores the shared secret, exactly once per
    /// enrollment. Re-enrolling replaces the previous secret and clears
    /// the replay guard.
    pub async fn execute(&self, input: EnrollTotpInput) -> Result<EnrollTotpOutput, OtpServiceError> {
        let secret_b32 = generate::totp_secret()?;
        self.credentials
            .put_secret(&input.user_id, &secret_b32)
            .await?;
        self.credentials.delete_last_step(&input.user_id).await?;

        let provisioning_uri =
            totp::provisioning_uri(&secret_b32, &input.account_label, &self.issuer);
        tracing::info!(user_id = %input.user_id, "totp enrollment created");
        Ok(EnrollTotpOutput {
            secret_b32,
            provisioning_uri,
        })
    }
}

// ── VerifyTotp ────────────────────────────────────────────────────────────────

pub struct VerifyTotpInput {
    pub user_id: String,
    pub code: String,
}

pub struct VerifyTotpUseCase<S>
where
    S: SecureStore,
{
    pub credentials: CredentialStore<S>,
}

impl<S> VerifyTotpUseCase<S>
where
    S: SecureStore,
{
    /// Accepts the current or the previous 30-second window, absorbing
    /// small clock drift on the authenticator side. The future window is
    /// intentionally not accepted. An accepted step is recorded so the
    /// same code cannot be replayed within its window.
    pub async fn execute(&self, input: VerifyTotpInput) -> Result<VerifyOutcome, OtpServiceError> {
        if !is_well_formed_code(&input.code) {
            return Ok(VerifyOutcome::InvalidFormat);
        }

        let Some(secret) = self.credentials.get_secret(&input.user_id).await? else {
            // Not enrolled; indistinguishable from a revoked secret.
            return Ok(VerifyOutcome::NotFoundOrExpired);
        };

        let current = totp::current_step();
        let matched_step = if input.code == totp::totp_at(&secret, current)? {
            Some(current)
        } else if current > 0 && input.code == totp::totp_at(&secret, current - 1)? {
            Some(current - 1)
        } else {
            None
        };

        let Some(step) = matched_step else {
            tracing::debug!(user_id = %input.user_id, "totp code mismatch");
            return Ok(VerifyOutcome::Mismatch);
        };

        if let Some(last) = self.credentials.get_last_step(&input.user_id).await? {
            if step <= last {
                tracing::debug!(user_id = %input.user_id, "totp replay within accepted window");
                return Ok(VerifyOutcome::Mismatch);
            }
        }

        self.credentials.put_last_step(&input.user_id, step).await?;
        Ok(VerifyOutcome::Verified)
    }
}

// ── DisableTotp ───────────────────────────────────────────────────────────────

pub struct DisableTotpUseCase<S>
where
    S: SecureStore,
{
    pub credentials: CredentialStore<S>,
}

impl<S> DisableTotpUseCase<S>
where
    S: SecureStore,
{
    /// Deletes the secret and the replay guard, disabling 2FA for the
    /// owner. Idempotent.
    pub async fn execute(&self, user_id: &str) -> Result<(), OtpServiceError> {
        self.credentials.delete_secret(user_id).await?;
        self.credentials.delete_last_step(user_id).await?;
        tracing::info!(user_id = %user_id, "totp disabled");
        Ok(())
    }
}
