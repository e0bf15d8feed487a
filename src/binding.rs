//! Hash binding between the ID Token and authorization-response artifacts
//!
//! The `c_hash` and `at_hash` claims bind the ID Token to the authorization
//! code and access token returned next to it. Both use the same
//! construction (OIDC Core 3.3.2.11): hash the artifact's ASCII bytes with
//! the digest matching the signing algorithm's strength, keep the left half,
//! Base64URL-encode without padding, compare byte for byte.

use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::utils::base64url;

/// Compute the expected binding value for an artifact under an algorithm
pub fn expected_hash(artifact: &str, algorithm: AlgorithmId) -> String {
    let digest: Vec<u8> = match algorithm {
        AlgorithmId::RS256 | AlgorithmId::ES256 => Sha256::digest(artifact.as_bytes()).to_vec(),
        AlgorithmId::RS384 | AlgorithmId::ES384 => Sha384::digest(artifact.as_bytes()).to_vec(),
        AlgorithmId::RS512 => Sha512::digest(artifact.as_bytes()).to_vec(),
    };
    base64url::encode_bytes(&digest[..digest.len() / 2])
}

fn verify_binding(
    artifact: &str,
    claim: Option<&str>,
    algorithm: AlgorithmId,
    claim_name: &'static str,
) -> Result<()> {
    let claim = claim.ok_or(Error::MissingHash(claim_name))?;
    if claim == expected_hash(artifact, algorithm) {
        Ok(())
    } else {
        Err(Error::BadHash(claim_name))
    }
}

/// Check the `c_hash` claim against the returned authorization code
pub fn verify_c_hash(code: &str, claim: Option<&str>, algorithm: AlgorithmId) -> Result<()> {
    verify_binding(code, claim, algorithm, "c_hash")
}

/// Check the `at_hash` claim against the returned access token
pub fn verify_at_hash(
    access_token: &str,
    claim: Option<&str>,
    algorithm: AlgorithmId,
) -> Result<()> {
    verify_binding(access_token, claim, algorithm, "at_hash")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODE: &str = "Qcb0Orv1Ltz1jj7C";

    #[test]
    fn c_hash_matches_recomputed_value() {
        let claim = expected_hash(CODE, AlgorithmId::RS256);
        assert!(verify_c_hash(CODE, Some(&claim), AlgorithmId::RS256).is_ok());
    }

    #[test]
    fn c_hash_mismatch_is_rejected() {
        let claim = expected_hash("a-different-code", AlgorithmId::RS256);
        assert_eq!(
            verify_c_hash(CODE, Some(&claim), AlgorithmId::RS256),
            Err(Error::BadHash("c_hash"))
        );
    }

    #[test]
    fn missing_c_hash_is_rejected() {
        assert_eq!(
            verify_c_hash(CODE, None, AlgorithmId::RS256),
            Err(Error::MissingHash("c_hash"))
        );
    }

    #[test]
    fn digest_strength_follows_algorithm() {
        // Same artifact, different algorithm strengths, different bindings
        let h256 = expected_hash(CODE, AlgorithmId::RS256);
        let h384 = expected_hash(CODE, AlgorithmId::RS384);
        let h512 = expected_hash(CODE, AlgorithmId::RS512);
        assert_ne!(h256, h384);
        assert_ne!(h384, h512);

        // Left half of SHA-256 is 16 bytes, 22 chars unpadded
        assert_eq!(h256.len(), 22);
        assert_eq!(h384.len(), 32);
        assert_eq!(h512.len(), 43);
    }

    #[test]
    fn ec_algorithms_share_digest_with_matching_rsa_strength() {
        assert_eq!(
            expected_hash(CODE, AlgorithmId::ES256),
            expected_hash(CODE, AlgorithmId::RS256)
        );
        assert_eq!(
            expected_hash(CODE, AlgorithmId::ES384),
            expected_hash(CODE, AlgorithmId::RS384)
        );
    }

    #[test]
    fn at_hash_uses_same_construction() {
        let token = "jHkWEdUXMU1BwAsC4vtUsZwnNvTIxEl0z9K3vx5KF0Y";
        let claim = expected_hash(token, AlgorithmId::RS256);
        assert!(verify_at_hash(token, Some(&claim), AlgorithmId::RS256).is_ok());
        assert_eq!(
            verify_at_hash(token, Some("tampered"), AlgorithmId::RS256),
            Err(Error::BadHash("at_hash"))
        );
    }
}
