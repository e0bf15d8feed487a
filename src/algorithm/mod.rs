//! Signing algorithm identifiers
//!
//! An OIDC Relying Party verifies against the provider's published public
//! keys, so only asymmetric algorithms are accepted. HMAC algorithms would
//! require the client secret as key material and are rejected as unsupported;
//! `none` is always rejected unless the session explicitly opts in.

mod verify;

pub(crate) use verify::verify_signature;

use std::fmt;

use crate::error::{Error, Result};

/// Asymmetric JWS algorithms accepted for ID Token signatures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmId {
    RS256,
    RS384,
    RS512,
    ES256,
    ES384,
}

impl AlgorithmId {
    /// Parse a JOSE header `alg` value
    pub fn from_str(alg: &str) -> Result<Self> {
        match alg {
            "RS256" => Ok(AlgorithmId::RS256),
            "RS384" => Ok(AlgorithmId::RS384),
            "RS512" => Ok(AlgorithmId::RS512),
            "ES256" => Ok(AlgorithmId::ES256),
            "ES384" => Ok(AlgorithmId::ES384),
            "none" => Err(Error::NoneAlgorithmRejected),
            other => Err(Error::UnsupportedAlgorithm(other.to_string())),
        }
    }

    /// The JOSE `alg` string
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::RS256 => "RS256",
            AlgorithmId::RS384 => "RS384",
            AlgorithmId::RS512 => "RS512",
            AlgorithmId::ES256 => "ES256",
            AlgorithmId::ES384 => "ES384",
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
