//! Provider discovery document
//!
//! The document is an explicit value handed to session construction.
//! Fetching it from `/.well-known/openid-configuration` is a transport
//! concern left to the caller; there is no process-wide discovery cache.

use serde::Deserialize;

use crate::error::{Error, Result};

/// The subset of the provider metadata the Relying Party reads
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryDocument {
    /// Issuer identifier; must match the ID Token `iss` claim exactly
    pub issuer: String,
    /// Where the provider publishes its JWK set
    pub jwks_uri: String,
    /// Authentication request endpoint
    pub authorization_endpoint: Option<String>,
    /// Code exchange endpoint
    pub token_endpoint: Option<String>,
    /// Userinfo endpoint
    pub userinfo_endpoint: Option<String>,
}

impl DiscoveryDocument {
    /// Parse a discovery response body
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        let document: DiscoveryDocument = serde_json::from_slice(bytes)
            .map_err(|e| Error::InvalidJson(format!("failed to parse discovery document: {e}")))?;

        if document.issuer.is_empty() {
            return Err(Error::InvalidConfiguration(
                "discovery document has an empty issuer".to_string(),
            ));
        }
        Ok(document)
    }

    /// Construct a document directly, for callers that configure the
    /// provider statically instead of via discovery
    pub fn new(issuer: impl Into<String>, jwks_uri: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            jwks_uri: jwks_uri.into(),
            authorization_endpoint: None,
            token_endpoint: None,
            userinfo_endpoint: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_discovery_response() {
        let body = br#"{
            "issuer": "https://op.example.com",
            "jwks_uri": "https://op.example.com/jwks",
            "authorization_endpoint": "https://op.example.com/authorize",
            "token_endpoint": "https://op.example.com/token",
            "userinfo_endpoint": "https://op.example.com/userinfo",
            "response_types_supported": ["code", "code id_token"]
        }"#;
        let document = DiscoveryDocument::from_json_bytes(body).unwrap();
        assert_eq!(document.issuer, "https://op.example.com");
        assert_eq!(document.jwks_uri, "https://op.example.com/jwks");
        assert_eq!(
            document.userinfo_endpoint.as_deref(),
            Some("https://op.example.com/userinfo")
        );
    }

    #[test]
    fn missing_jwks_uri_is_invalid() {
        let body = br#"{"issuer": "https://op.example.com"}"#;
        assert!(matches!(
            DiscoveryDocument::from_json_bytes(body),
            Err(Error::InvalidJson(_))
        ));
    }

    #[test]
    fn empty_issuer_is_invalid() {
        let body = br#"{"issuer": "", "jwks_uri": "https://op.example.com/jwks"}"#;
        assert!(matches!(
            DiscoveryDocument::from_json_bytes(body),
            Err(Error::InvalidConfiguration(_))
        ));
    }
}
