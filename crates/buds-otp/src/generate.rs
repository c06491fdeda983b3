//! Random value generation for every one-time-credential flavor.

use anyhow::anyhow;
use data_encoding::BASE32_NOPAD;
use rand::RngExt;

use buds_domain::captcha::{CAPTCHA_ALPHABET, CAPTCHA_LEN};
use buds_domain::credential::{CODE_MAX, CODE_MIN, TOTP_SECRET_LEN};

use crate::error::OtpServiceError;

/// Uniform 6-digit decimal code in [100000, 999999].
///
/// The range starts at 100000, so a leading zero is impossible and every
/// output is exactly six digits without padding.
pub fn numeric_code() -> String {
    let mut rng = rand::rng();
    rng.random_range(CODE_MIN..=CODE_MAX).to_string()
}

/// 20 random bytes from the OS source, Base32-encoded without padding
/// (RFC 4648 alphabet `A–Z2–7`), for otpauth URIs and manual entry.
///
/// A failing OS source is a [`OtpServiceError::Generation`] error; there
/// is no fallback to a non-cryptographic source.
pub fn totp_secret() -> Result<String, OtpServiceError> {
    let mut buf = [0u8; TOTP_SECRET_LEN];
    getrandom::fill(&mut buf).map_err(|e| OtpServiceError::Generation(anyhow!(e)))?;
    Ok(BASE32_NOPAD.encode(&buf))
}

/// 6 characters sampled uniformly with replacement from the unambiguous
/// CAPTCHA alphabet.
pub fn captcha_text() -> String {
    let mut rng = rand::rng();
    (0..CAPTCHA_LEN)
        .map(|_| CAPTCHA_ALPHABET[rng.random_range(0..CAPTCHA_ALPHABET.len())] as char)
        .collect()
}
