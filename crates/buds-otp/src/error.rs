use anyhow::anyhow;

/// Verifier core error variants.
///
/// Wrong codes are not errors; they surface as
/// [`buds_domain::outcome::VerifyOutcome`] values. These variants cover
/// the genuinely fallible operations: random generation, secure-store
/// I/O and code delivery. All are retryable from the caller's point of
/// view.
#[derive(Debug, thiserror::Error)]
pub enum OtpServiceError {
    #[error("random source unavailable")]
    Generation(#[source] anyhow::Error),
    #[error("credential store failure")]
    Storage(#[source] anyhow::Error),
    #[error("code delivery failure")]
    Delivery(#[source] anyhow::Error),
    #[error("stored secret is not valid base32")]
    MalformedSecret,
}

impl OtpServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Generation(_) => "GENERATION_FAILURE",
            Self::Storage(_) => "STORAGE_FAILURE",
            Self::Delivery(_) => "DELIVERY_FAILURE",
            Self::MalformedSecret => "MALFORMED_SECRET",
        }
    }

    /// Wrap a secure-store I/O failure.
    pub fn storage<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage(anyhow!(source))
    }
}
