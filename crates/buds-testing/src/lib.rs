//! Test doubles and fixtures for the verification core.
//!
//! Dev-dependency only; never ship these adapters.

pub mod fixture;
pub mod mail;
pub mod store;
