//! HOTP/TOTP derivation (RFC 4226 / RFC 6238) and the otpauth
//! provisioning URI.
//!
//! HMAC-SHA1, 6 digits, 30-second steps: the parameter set every
//! mainstream authenticator app ships with. Derivation is a pure
//! function of `(secret, step)`; derived codes are never stored.

use chrono::{DateTime, Utc};
use data_encoding::BASE32_NOPAD;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use buds_domain::credential::TOTP_PERIOD_SECS;

use crate::error::OtpServiceError;

type HmacSha1 = Hmac<Sha1>;

/// RFC 4226 HOTP: HMAC-SHA1 over the big-endian counter with dynamic
/// truncation, zero-padded to six digits.
pub fn hotp(secret: &[u8], counter: u64) -> String {
    let mut mac = HmacSha1::new_from_slice(secret).expect("HMAC accepts any key length");
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    let binary = u32::from_be_bytes([
        digest[offset],
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ]) & 0x7fff_ffff;

    format!("{:06}", binary % 1_000_000)
}

/// Time step for an instant: `floor(unix_seconds / 30)`.
pub fn step_at(at: DateTime<Utc>) -> u64 {
    (at.timestamp() / TOTP_PERIOD_SECS) as u64
}

/// Time step for the current wall clock.
pub fn current_step() -> u64 {
    step_at(Utc::now())
}

/// The 6-digit code for a Base32 secret at a given time step.
///
/// Pure: the same `(secret, step)` always yields the same code.
pub fn totp_at(secret_b32: &str, step: u64) -> Result<String, OtpServiceError> {
    let secret = BASE32_NOPAD
        .decode(secret_b32.as_bytes())
        .map_err(|_| OtpServiceError::MalformedSecret)?;
    Ok(hotp(&secret, step))
}

/// Standard TOTP enrollment URI, rendered as a QR code by the host UI:
/// `otpauth://totp/{issuer}:{account}?secret={secret}&issuer={issuer}`.
pub fn provisioning_uri(secret_b32: &str, account_label: &str, issuer: &str) -> String {
    format!("otpauth://totp/{issuer}:{account_label}?secret={secret_b32}&issuer={issuer}")
}
