//! JWK (JSON Web Key) struct and conversion to key material

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::jwks::SigningKey;
use crate::keys::{EcCurve, Key};
use crate::utils::{base64url, der};

/// A single JSON Web Key as published in a JWK set
///
/// All fields are optional so that parsing accepts the document as the
/// provider published it. Validation happens during conversion to
/// [`SigningKey`], not during parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct Jwk {
    /// Key type ("RSA", "EC")
    pub kty: Option<String>,
    /// Key ID
    pub kid: Option<String>,
    /// Algorithm the key is pinned to
    pub alg: Option<String>,
    /// Key use ("sig", "enc")
    #[serde(rename = "use")]
    pub key_use: Option<String>,
    /// RSA modulus (Base64URL)
    pub n: Option<String>,
    /// RSA exponent (Base64URL)
    pub e: Option<String>,
    /// EC curve name
    pub crv: Option<String>,
    /// EC x coordinate (Base64URL)
    pub x: Option<String>,
    /// EC y coordinate (Base64URL)
    pub y: Option<String>,
}

impl Jwk {
    /// Whether the key is published for signature verification
    ///
    /// Keys without a `use` field count as signing keys; only an explicit
    /// non-`sig` use excludes a key.
    pub fn is_signing_key(&self) -> bool {
        self.key_use.as_deref().map_or(true, |u| u == "sig")
    }

    /// Convert to a [`SigningKey`]
    ///
    /// Returns `Ok(None)` for key types this crate cannot verify with
    /// (the key is skipped, not an error). A key of a supported type with
    /// missing or undecodable parameters is `MalformedKeySet`.
    pub fn to_signing_key(&self) -> Result<Option<SigningKey>> {
        let key = match self.kty.as_deref() {
            Some("RSA") => self.to_rsa_key()?,
            Some("EC") => self.to_ec_key()?,
            Some(other) => {
                tracing::warn!(kty = other, kid = ?self.kid, "skipping key of unsupported type");
                return Ok(None);
            }
            None => {
                return Err(Error::MalformedKeySet("key missing kty".to_string()));
            }
        };

        Ok(Some(SigningKey::new(
            self.kid.clone(),
            self.alg.clone(),
            key,
        )))
    }

    fn to_rsa_key(&self) -> Result<Key> {
        let n = self
            .n
            .as_deref()
            .ok_or_else(|| Error::MalformedKeySet("rsa key missing n (modulus)".to_string()))?;
        let e = self
            .e
            .as_deref()
            .ok_or_else(|| Error::MalformedKeySet("rsa key missing e (exponent)".to_string()))?;

        let n_bytes = base64url::decode_bytes(n)
            .map_err(|e| Error::MalformedKeySet(format!("failed to decode n: {e}")))?;
        let e_bytes = base64url::decode_bytes(e)
            .map_err(|e| Error::MalformedKeySet(format!("failed to decode e: {e}")))?;

        let spki = der::rsa_spki_from_n_e(&n_bytes, &e_bytes)?;
        Ok(Key::Rsa(spki))
    }

    fn to_ec_key(&self) -> Result<Key> {
        let crv = self
            .crv
            .as_deref()
            .ok_or_else(|| Error::MalformedKeySet("ec key missing crv".to_string()))?;

        let curve = match crv.trim() {
            "P-256" | "P256" => EcCurve::P256,
            "P-384" | "P384" => EcCurve::P384,
            other => {
                return Err(Error::MalformedKeySet(format!(
                    "unsupported ec curve: {other}"
                )));
            }
        };

        let x = self
            .x
            .as_deref()
            .ok_or_else(|| Error::MalformedKeySet("ec key missing x".to_string()))?;
        let y = self
            .y
            .as_deref()
            .ok_or_else(|| Error::MalformedKeySet("ec key missing y".to_string()))?;

        let x_bytes = base64url::decode_bytes(x)
            .map_err(|e| Error::MalformedKeySet(format!("failed to decode x: {e}")))?;
        let y_bytes = base64url::decode_bytes(y)
            .map_err(|e| Error::MalformedKeySet(format!("failed to decode y: {e}")))?;

        let spki = der::ec_spki_from_x_y(&x_bytes, &y_bytes, curve)?;
        Ok(Key::Ec(spki, curve))
    }
}
