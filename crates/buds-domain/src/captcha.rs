//! Signup CAPTCHA challenge type.

use serde::{Deserialize, Serialize};

/// A challenge-response CAPTCHA for one signup attempt.
///
/// `challenge` equals `text`: the comparison target is the generated
/// string itself, held client-side for the lifetime of the form session.
/// Regenerating replaces the prior challenge entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptchaChallenge {
    pub text: String,
    pub challenge: String,
}

/// Challenge length in characters.
pub const CAPTCHA_LEN: usize = 6;

/// Challenge alphabet: uppercase letters and digits minus the visually
/// ambiguous I, O, 0 and 1.
pub const CAPTCHA_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
