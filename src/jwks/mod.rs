//! JWK set parsing and key resolution

mod jwk;
mod store;

pub use jwk::Jwk;
pub use store::KeyStore;

use crate::keys::Key;

/// A usable verification key from the provider's JWK set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningKey {
    key_id: Option<String>,
    algorithm: Option<String>,
    key: Key,
}

impl SigningKey {
    pub(crate) fn new(key_id: Option<String>, algorithm: Option<String>, key: Key) -> Self {
        Self {
            key_id,
            algorithm,
            key,
        }
    }

    /// The `kid` this key was published under, if any
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    /// The `alg` the provider pinned this key to, if any
    pub fn algorithm(&self) -> Option<&str> {
        self.algorithm.as_deref()
    }

    /// The key material
    pub fn key(&self) -> &Key {
        &self.key
    }
}
