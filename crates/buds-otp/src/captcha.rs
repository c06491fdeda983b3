//! Challenge-response CAPTCHA used once at signup.
//!
//! Stateless by design: the challenge IS the answer, held client-side
//! for a single form session and never persisted or verified
//! server-side. That makes this a low-stakes bot-deterrence speed bump,
//! not a security boundary; treat it accordingly.

use buds_domain::captcha::CaptchaChallenge;

use crate::generate;

/// A new 6-character challenge. Regenerating replaces the prior
/// challenge entirely; the old one becomes permanently unverifiable.
pub fn generate() -> CaptchaChallenge {
    let text = generate::captcha_text();
    CaptchaChallenge {
        challenge: text.clone(),
        text,
    }
}

/// Case-insensitive comparison of the user's input to the challenge.
pub fn verify(user_input: &str, challenge: &str) -> bool {
    user_input.to_uppercase() == challenge.to_uppercase()
}
