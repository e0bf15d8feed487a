//! Public key material for signature verification
//!
//! Keys are stored as DER SubjectPublicKeyInfo bytes, the format aws-lc-rs
//! verifies against. Conversion from JWK parameters happens in the `jwks`
//! module at key-set load time.

use crate::algorithm::AlgorithmId;

/// Supported elliptic curves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcCurve {
    P256,
    P384,
}

/// A verification key with its family
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// RSA public key (SPKI DER)
    Rsa(Vec<u8>),
    /// EC public key (SPKI DER) on the given curve
    Ec(Vec<u8>, EcCurve),
}

impl Key {
    /// The SPKI DER bytes backing this key
    pub fn spki_der(&self) -> &[u8] {
        match self {
            Key::Rsa(der) => der,
            Key::Ec(der, _) => der,
        }
    }

    /// Whether this key's family can verify signatures of the given algorithm
    ///
    /// RSA keys serve any RS* strength; EC keys are pinned to the curve the
    /// algorithm mandates.
    pub fn supports(&self, algorithm: AlgorithmId) -> bool {
        match (self, algorithm) {
            (Key::Rsa(_), AlgorithmId::RS256 | AlgorithmId::RS384 | AlgorithmId::RS512) => true,
            (Key::Ec(_, EcCurve::P256), AlgorithmId::ES256) => true,
            (Key::Ec(_, EcCurve::P384), AlgorithmId::ES384) => true,
            _ => false,
        }
    }
}
