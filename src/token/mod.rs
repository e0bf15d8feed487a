//! Token pipeline states
//!
//! A token moves through two states: [`ParsedToken`] (split and decoded,
//! untrusted) and [`VerifiedToken`] (signature checked against the key
//! store). Claims can only be read from a `VerifiedToken`, so nothing in the
//! crate can act on claim values before the signature has been verified.

mod header;
mod parsed;
mod verified;

pub use header::TokenHeader;
pub use parsed::ParsedToken;
pub use verified::VerifiedToken;
