//! Verification outcomes.

use serde::{Deserialize, Serialize};

/// Result of a verification attempt.
///
/// Outcomes are values, never errors: a wrong code is expected user
/// behavior and the calling UI re-prompts on anything but `Verified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyOutcome {
    /// Input matched the live credential. Single-use credentials are
    /// consumed before this is reported.
    Verified,
    /// Input is not exactly six ASCII digits.
    InvalidFormat,
    /// No live credential for the subject. Absent and expired are
    /// indistinguishable to the caller.
    NotFoundOrExpired,
    /// Input did not match. The credential is left intact, allowing
    /// further attempts until it expires.
    Mismatch,
}

impl VerifyOutcome {
    pub fn is_verified(self) -> bool {
        matches!(self, Self::Verified)
    }
}
