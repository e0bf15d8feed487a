//! Internal helpers

pub mod base64url;
pub mod der;
