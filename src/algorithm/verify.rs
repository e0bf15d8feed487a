//! Signature verification against candidate keys

use aws_lc_rs::signature::{self, UnparsedPublicKey, VerificationAlgorithm};

use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::jwks::SigningKey;
use crate::token::{ParsedToken, VerifiedToken};
use crate::utils::base64url;

fn verification_algorithm(alg: AlgorithmId) -> &'static dyn VerificationAlgorithm {
    match alg {
        AlgorithmId::RS256 => &signature::RSA_PKCS1_2048_8192_SHA256,
        AlgorithmId::RS384 => &signature::RSA_PKCS1_2048_8192_SHA384,
        AlgorithmId::RS512 => &signature::RSA_PKCS1_2048_8192_SHA512,
        // JWS ECDSA signatures are fixed-width r || s, not ASN.1
        AlgorithmId::ES256 => &signature::ECDSA_P256_SHA256_FIXED,
        AlgorithmId::ES384 => &signature::ECDSA_P384_SHA384_FIXED,
    }
}

/// Verify the token signature against a candidate key set
///
/// Candidates come from [`crate::jwks::KeyStore::resolve`]. A kid-resolved
/// candidate is verified alone; without a kid, every family-compatible key is
/// tried in key-set order and the first success wins. Exhausting the set
/// yields `BadSignature` if at least one compatible key was tried, otherwise
/// `NoMatchingKey`.
pub(crate) fn verify_signature(
    parsed: ParsedToken,
    candidates: &[&SigningKey],
) -> Result<VerifiedToken> {
    let algorithm = parsed.algorithm()?;

    // A kid-resolved candidate carrying a contradicting alg field is a
    // provider misconfiguration, not a trial-verification case.
    if parsed.key_id().is_some() {
        if let Some(candidate) = candidates.first() {
            if let Some(jwk_alg) = candidate.algorithm() {
                if jwk_alg != algorithm.as_str() {
                    return Err(Error::AlgorithmMismatch {
                        token_alg: algorithm.as_str().to_string(),
                        jwk_alg: jwk_alg.to_string(),
                    });
                }
            }
        }
    }

    let signature_bytes = base64url::decode_bytes(parsed.signature())?;
    let signing_input = parsed.signing_input();

    if candidates.len() > 1 {
        tracing::debug!(
            candidates = candidates.len(),
            "no kid in token header, trial-verifying against all keys"
        );
    }

    let mut tried = 0usize;
    for candidate in candidates {
        if !candidate.key().supports(algorithm) {
            continue;
        }
        tried += 1;

        let public_key =
            UnparsedPublicKey::new(verification_algorithm(algorithm), candidate.key().spki_der());
        if public_key
            .verify(signing_input.as_bytes(), &signature_bytes)
            .is_ok()
        {
            return Ok(VerifiedToken::new(parsed, algorithm));
        }
    }

    if tried > 0 {
        Err(Error::BadSignature)
    } else {
        Err(Error::NoMatchingKey)
    }
}
