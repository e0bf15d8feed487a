//! Shared fixtures for integration tests
//!
//! Tokens are signed with jsonwebtoken against freshly generated RSA keys,
//! and the matching JWK set is built from the raw key parameters, so the
//! whole pipeline from JWKS bytes to outcome is exercised.

#![allow(dead_code)]

use std::sync::OnceLock;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use rsa::pkcs8::EncodePrivateKey;
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use oidc_rp::{FixedClock, Flow, FlowConfig, RelyingParty};

pub const ISSUER: &str = "https://op.example.com";
pub const CLIENT_ID: &str = "conformance-client";
pub const NONCE: &str = "n-0S6_WzA2Mj";
pub const NOW: i64 = 1_700_000_000;

pub struct TestKey {
    private: RsaPrivateKey,
    encoding: EncodingKey,
}

impl TestKey {
    fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let private = RsaPrivateKey::new(&mut rng, 2048).expect("rsa keygen");
        let pem = private
            .to_pkcs8_pem(rsa::pkcs8::LineEnding::LF)
            .expect("pkcs8 pem");
        let encoding = EncodingKey::from_rsa_pem(pem.as_bytes()).expect("encoding key");
        Self { private, encoding }
    }

    /// JWK value for this key's public half
    pub fn jwk(&self, kid: Option<&str>) -> Value {
        let public = RsaPublicKey::from(&self.private);
        let mut jwk = json!({
            "kty": "RSA",
            "use": "sig",
            "alg": "RS256",
            "n": URL_SAFE_NO_PAD.encode(public.n().to_bytes_be()),
            "e": URL_SAFE_NO_PAD.encode(public.e().to_bytes_be()),
        });
        if let Some(kid) = kid {
            jwk["kid"] = json!(kid);
        }
        jwk
    }

    /// Sign claims into a compact RS256 token
    pub fn sign(&self, kid: Option<&str>, claims: &Value) -> String {
        self.sign_with(Algorithm::RS256, kid, claims)
    }

    /// Sign claims with an explicit RSA algorithm strength
    pub fn sign_with(&self, algorithm: Algorithm, kid: Option<&str>, claims: &Value) -> String {
        let mut header = Header::new(algorithm);
        header.kid = kid.map(str::to_string);
        encode(&header, claims, &self.encoding).expect("token signing")
    }
}

pub fn provider_key() -> &'static TestKey {
    static KEY: OnceLock<TestKey> = OnceLock::new();
    KEY.get_or_init(TestKey::generate)
}

pub fn second_key() -> &'static TestKey {
    static KEY: OnceLock<TestKey> = OnceLock::new();
    KEY.get_or_init(TestKey::generate)
}

pub fn jwks_bytes(jwks: &[Value]) -> Vec<u8> {
    serde_json::to_vec(&json!({ "keys": jwks })).expect("jwks json")
}

/// A hybrid-flow session over the given JWK set, with time frozen at [`NOW`]
pub fn relying_party(jwks: &[Value], flow: Flow) -> RelyingParty {
    let discovery = oidc_rp::DiscoveryDocument::new(ISSUER, format!("{ISSUER}/jwks"));
    RelyingParty::new(discovery, &jwks_bytes(jwks), FlowConfig::new(flow))
        .expect("session construction")
        .with_clock(FixedClock(NOW))
}

/// Claims that pass every check for [`relying_party`] with the default nonce
pub fn standard_claims() -> Value {
    json!({
        "iss": ISSUER,
        "sub": "user-248289761001",
        "aud": CLIENT_ID,
        "exp": NOW + 600,
        "iat": NOW - 10,
        "nonce": NONCE,
    })
}

/// Independently computed left-half SHA-256 binding for an RS256 token
pub fn sha256_half_b64(artifact: &str) -> String {
    let digest = Sha256::digest(artifact.as_bytes());
    URL_SAFE_NO_PAD.encode(&digest[..16])
}

/// Swap the first signature character for a different valid Base64URL
/// character, keeping the token parseable but unverifiable
pub fn corrupt_signature(token: &str) -> String {
    let (rest, signature) = token.rsplit_once('.').expect("compact token");
    let mut sig: Vec<u8> = signature.bytes().collect();
    let first = sig.first_mut().expect("non-empty signature");
    *first = if *first == b'A' { b'B' } else { b'A' };
    format!("{rest}.{}", String::from_utf8(sig).expect("ascii signature"))
}

/// Build an unsigned (`alg: none`) token from claims
pub fn unsigned_token(claims: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).expect("claims json"));
    format!("{header}.{payload}.")
}
