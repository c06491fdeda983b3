//! Shared test fixtures.

/// RFC 6238 reference secret (ASCII `12345678901234567890`) in Base32.
pub const RFC6238_SECRET_B32: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

pub fn test_email() -> String {
    "user@example.com".to_owned()
}

pub fn test_user_id() -> String {
    "00000000-0000-0000-0000-000000000001".to_owned()
}
