//! One-time credential verification core for the Buds client.
//!
//! Three credential flavors share one design: an emailed 6-digit code
//! stored with a 10-minute TTL and consumed on first successful check,
//! a long-lived TOTP secret for offline authenticator apps (RFC 6238,
//! 30-second steps), and the stateless signup CAPTCHA. Durable storage
//! and mail delivery are ports ([`domain::repository`]) implemented by
//! the host application; adapters for Redis and demo logging live in
//! [`infra`].

pub mod captcha;
pub mod config;
pub mod domain;
pub mod error;
pub mod generate;
pub mod infra;
pub mod store;
pub mod totp;
pub mod tracing;
pub mod usecase;
