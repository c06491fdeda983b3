use crate::domain::repository::Mailer;
use crate::error::OtpServiceError;

/// Demo delivery: logs the code instead of sending an email.
///
/// Mirrors the app's demo mode, where the code is surfaced in-app for
/// testing. Production builds wire a real provider adapter behind the
/// same port.
#[derive(Clone, Copy, Default)]
pub struct TracingMailer;

impl Mailer for TracingMailer {
    async fn send_code(&self, recipient: &str, code: &str) -> Result<(), OtpServiceError> {
        tracing::info!(
            recipient = %recipient,
            code = %code,
            "demo mode: verification code logged, no email sent"
        );
        Ok(())
    }
}
