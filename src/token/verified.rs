//! Signature-verified token

use crate::algorithm::AlgorithmId;
use crate::claims::IdTokenClaims;
use crate::error::{Error, Result};
use crate::token::ParsedToken;

/// A token whose signature has been verified against the key store
///
/// Only this type can hand out claims. The algorithm is `None` solely for
/// tokens accepted through the explicit unsigned opt-in; those carry no
/// digest strength, so hash binding cannot be checked for them.
pub struct VerifiedToken {
    algorithm: Option<AlgorithmId>,
    raw_payload: String,
}

impl VerifiedToken {
    pub(crate) fn new(parsed: ParsedToken, algorithm: AlgorithmId) -> Self {
        Self {
            algorithm: Some(algorithm),
            raw_payload: parsed.raw_payload().to_string(),
        }
    }

    pub(crate) fn unsigned(parsed: ParsedToken) -> Self {
        Self {
            algorithm: None,
            raw_payload: parsed.raw_payload().to_string(),
        }
    }

    /// The algorithm the signature verified under, if the token was signed
    pub fn algorithm(&self) -> Option<AlgorithmId> {
        self.algorithm
    }

    /// Parse the payload into ID Token claims
    pub fn parse_claims(&self) -> Result<IdTokenClaims> {
        serde_json::from_str(&self.raw_payload)
            .map_err(|e| Error::InvalidJson(format!("failed to parse claims: {e}")))
    }
}
