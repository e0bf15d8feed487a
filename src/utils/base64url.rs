//! Base64URL helpers (unpadded alphabet, RFC 7515)
//!
//! Thin wrappers over the `base64` crate that map decode failures into the
//! crate error type.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::{Error, Result};

/// Decode an unpadded Base64URL string into raw bytes
pub fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| Error::InvalidBase64(e.to_string()))
}

/// Decode an unpadded Base64URL string into UTF-8 text
pub fn decode_str(input: &str) -> Result<String> {
    let bytes = decode_bytes(input)?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidBase64(e.to_string()))
}

/// Encode raw bytes as an unpadded Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}
