//! `Mailer` doubles.

use std::sync::{Arc, Mutex};

use buds_otp::domain::repository::Mailer;
use buds_otp::error::OtpServiceError;

/// Mailer that records every `(recipient, code)` pair instead of
/// delivering anything.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the delivery log for post-execution inspection.
    pub fn sent_handle(&self) -> Arc<Mutex<Vec<(String, String)>>> {
        Arc::clone(&self.sent)
    }
}

impl Mailer for RecordingMailer {
    async fn send_code(&self, recipient: &str, code: &str) -> Result<(), OtpServiceError> {
        self.sent
            .lock()
            .unwrap()
            .push((recipient.to_owned(), code.to_owned()));
        Ok(())
    }
}

/// Mailer whose every delivery fails.
#[derive(Clone, Copy, Default)]
pub struct FailingMailer;

impl Mailer for FailingMailer {
    async fn send_code(&self, _recipient: &str, _code: &str) -> Result<(), OtpServiceError> {
        Err(OtpServiceError::Delivery(anyhow::anyhow!(
            "injected mail failure"
        )))
    }
}
