//! One-time credential records and their tunable parameters.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One live email verification code bound to a subject key.
///
/// Serialized as JSON into the secure store. A record is live only while
/// `now - issued_at <= ttl`; expired records are treated as absent and
/// purged on the read that discovers them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCode {
    pub code: String,
    pub issued_at: DateTime<Utc>,
    pub ttl_ms: i64,
}

impl StoredCode {
    /// A fresh record issued now.
    pub fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            issued_at: Utc::now(),
            ttl_ms: ttl.num_milliseconds(),
        }
    }

    pub fn is_live(&self) -> bool {
        Utc::now() - self.issued_at <= Duration::milliseconds(self.ttl_ms)
    }
}

/// True when the input has the shape of a one-time code: exactly
/// [`CODE_DIGITS`] ASCII digits. Anything else is rejected before any
/// storage access.
pub fn is_well_formed_code(input: &str) -> bool {
    input.len() == CODE_DIGITS && input.bytes().all(|b| b.is_ascii_digit())
}

/// One-time code length in digits.
pub const CODE_DIGITS: usize = 6;

/// Smallest generated code value. The range starts at 100000 so every
/// output is exactly six digits without padding.
pub const CODE_MIN: u32 = 100_000;

/// Largest generated code value.
pub const CODE_MAX: u32 = 999_999;

/// Email code time-to-live in milliseconds (10 minutes).
pub const CODE_TTL_MS: i64 = 10 * 60 * 1000;

/// Raw TOTP secret length in bytes (160 bits, 32 Base32 characters).
pub const TOTP_SECRET_LEN: usize = 20;

/// TOTP time-step length in seconds.
pub const TOTP_PERIOD_SECS: i64 = 30;
