//! Parsed but untrusted token

use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::token::TokenHeader;
use crate::utils::base64url;

/// An ID Token split into its three compact parts with the header decoded
///
/// The payload is decoded to text but deliberately not parsed into claims:
/// claim values must not be read before the signature is verified.
pub struct ParsedToken {
    header: TokenHeader,
    header_b64: String,
    payload_b64: String,
    signature_b64: String,
    raw_payload: String,
}

impl ParsedToken {
    /// Parse a compact-serialized token ("header.payload.signature")
    pub fn from_compact(token: &str) -> Result<Self> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(Error::InvalidFormat);
        }

        let header_b64 = parts[0].to_string();
        let payload_b64 = parts[1].to_string();
        let signature_b64 = parts[2].to_string();

        let header_json = base64url::decode_str(&header_b64)?;
        let header: TokenHeader = serde_json::from_str(&header_json)
            .map_err(|e| Error::InvalidJson(format!("failed to parse header: {e}")))?;

        let raw_payload = base64url::decode_str(&payload_b64)?;

        Ok(Self {
            header,
            header_b64,
            payload_b64,
            signature_b64,
            raw_payload,
        })
    }

    /// The decoded JOSE header
    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    /// The header's `kid` hint, if any
    pub fn key_id(&self) -> Option<&str> {
        self.header.kid.as_deref()
    }

    /// The declared algorithm
    pub fn algorithm(&self) -> Result<AlgorithmId> {
        self.header.parse_algorithm()
    }

    /// The signing input (header.payload) the signature covers
    pub(crate) fn signing_input(&self) -> String {
        format!("{}.{}", self.header_b64, self.payload_b64)
    }

    /// The Base64URL signature part
    pub(crate) fn signature(&self) -> &str {
        &self.signature_b64
    }

    /// The decoded payload JSON. Untrusted until verification.
    pub(crate) fn raw_payload(&self) -> &str {
        &self.raw_payload
    }
}
