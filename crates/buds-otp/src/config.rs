use buds_domain::credential::CODE_TTL_MS;

/// Verifier tunables.
///
/// Hosts construct this directly or load it from the environment at
/// startup and pass it down; there is no module-level state.
#[derive(Debug, Clone)]
pub struct TwoFactorConfig {
    /// Email code time-to-live in milliseconds. Env var: `CODE_TTL_MS`.
    pub code_ttl_ms: i64,
    /// Issuer label for otpauth provisioning URIs. Env var: `TOTP_ISSUER`.
    pub totp_issuer: String,
}

impl Default for TwoFactorConfig {
    fn default() -> Self {
        Self {
            code_ttl_ms: CODE_TTL_MS,
            totp_issuer: "Buds".to_owned(),
        }
    }
}

impl TwoFactorConfig {
    /// Loads overrides from the environment; every var is optional.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            code_ttl_ms: std::env::var("CODE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.code_ttl_ms),
            totp_issuer: std::env::var("TOTP_ISSUER").unwrap_or(defaults.totp_issuer),
        }
    }
}
