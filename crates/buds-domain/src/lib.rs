//! Domain types for the Buds authentication verification core.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/`.

pub mod captcha;
pub mod credential;
pub mod outcome;
