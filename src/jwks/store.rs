//! Key store built from a provider's JWK set document

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::jwks::{Jwk, SigningKey};

#[derive(Deserialize)]
struct JwkSetDocument {
    keys: Vec<Jwk>,
}

/// The provider's published verification keys, loaded once per session
///
/// The store is immutable after construction and safe to share across
/// threads. Resolution follows the JOSE `kid` conventions:
///
/// - header has a `kid` and a key matches: that key alone
/// - header has a `kid` and nothing matches: no candidates
/// - header has no `kid` and the set holds one key: that key
/// - header has no `kid` and the set holds several: every key, for trial
///   verification in published order
///
/// The trial-verification fallback is deliberate: providers are allowed to
/// omit `kid` even with several keys in the set, and the token is only
/// accepted if one of them verifies the signature.
#[derive(Debug, Clone)]
pub struct KeyStore {
    keys: Vec<SigningKey>,
}

impl KeyStore {
    /// Parse a raw JWK set document into a key store
    ///
    /// Non-signing keys (`use` other than `sig`) and key types this crate
    /// cannot verify with are skipped. A key of a supported type with broken
    /// parameters fails the whole load with `MalformedKeySet`. An empty
    /// usable set is not a load error; resolution will simply find nothing.
    pub fn from_jwks_bytes(bytes: &[u8]) -> Result<Self> {
        let document: JwkSetDocument = serde_json::from_slice(bytes)
            .map_err(|e| Error::MalformedKeySet(e.to_string()))?;

        let mut keys = Vec::with_capacity(document.keys.len());
        for jwk in &document.keys {
            if !jwk.is_signing_key() {
                tracing::debug!(kid = ?jwk.kid, "skipping non-signing key");
                continue;
            }
            if let Some(key) = jwk.to_signing_key()? {
                keys.push(key);
            }
        }

        tracing::debug!(keys = keys.len(), "loaded jwk set");
        Ok(Self { keys })
    }

    /// Candidate keys for a token header's `kid`
    pub fn resolve(&self, kid: Option<&str>) -> Vec<&SigningKey> {
        match kid {
            Some(kid) => self
                .keys
                .iter()
                .filter(|k| k.key_id() == Some(kid))
                .collect(),
            None => self.keys.iter().collect(),
        }
    }

    /// Number of usable keys in the store
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the store holds no usable keys
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
