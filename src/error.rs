//! Error taxonomy for ID Token and userinfo validation
//!
//! Every rejection surfaces exactly one variant. Validation is fail-fast:
//! the first rule that fails determines the variant, later rules are not
//! evaluated. Transport variants (`KeyFetchTimeout`, `UserinfoTimeout`) are
//! reserved for collaborators that fetch documents over the network; the
//! validation path itself never produces them.

use thiserror::Error;

/// Validation and parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid token format: expected three parts separated by '.'")]
    InvalidFormat,

    #[error("Base64URL decoding failed: {0}")]
    InvalidBase64(String),

    #[error("JSON parsing failed: {0}")]
    InvalidJson(String),

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Algorithm '{0}' is not supported")]
    UnsupportedAlgorithm(String),

    #[error("The 'none' algorithm is rejected (RFC 8725)")]
    NoneAlgorithmRejected,

    #[error("JWK algorithm '{jwk_alg}' contradicts token header algorithm '{token_alg}'")]
    AlgorithmMismatch { token_alg: String, jwk_alg: String },

    // ============================================================================
    // Key Set Errors
    // ============================================================================
    #[error("Malformed JWK set: {0}")]
    MalformedKeySet(String),

    #[error("No key with kid '{0}' in the JWK set")]
    UnknownKey(String),

    #[error("No key in the JWK set is usable for the token's algorithm")]
    NoMatchingKey,

    #[error("Signature verification failed")]
    BadSignature,

    // ============================================================================
    // Claim Errors
    // ============================================================================
    #[error("Issuer mismatch: expected '{expected}', found {found:?}")]
    IssuerMismatch {
        expected: String,
        found: Option<String>,
    },

    #[error("Audience does not include the client id '{client_id}'")]
    AudienceMismatch { client_id: String },

    #[error("Token expired at {expired_at} (now: {now})")]
    Expired { expired_at: i64, now: i64 },

    #[error("Required claim 'iat' is missing")]
    IssuedAtMissing,

    #[error("Token issued at {issued_at} is implausible (now: {now})")]
    IssuedAtImplausible { issued_at: i64, now: i64 },

    #[error("Nonce mismatch")]
    NonceMismatch,

    #[error("Required claim 'sub' is missing or empty")]
    SubjectMissing,

    // ============================================================================
    // Hash Binding Errors
    // ============================================================================
    #[error("Hash binding claim '{0}' does not match the returned artifact")]
    BadHash(&'static str),

    #[error("Required hash binding claim '{0}' is missing")]
    MissingHash(&'static str),

    // ============================================================================
    // Userinfo Errors
    // ============================================================================
    #[error("Authorization header is missing")]
    MissingAuthorizationHeader,

    #[error("Authorization scheme '{0}' is not Bearer")]
    WrongScheme(String),

    #[error("Userinfo subject '{found}' does not match ID Token subject '{expected}'")]
    SubjectMismatch { expected: String, found: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("Timed out fetching the JWK set")]
    KeyFetchTimeout,

    #[error("Timed out calling the userinfo endpoint")]
    UserinfoTimeout,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl Error {
    /// Whether this error reflects a transport failure rather than a
    /// protocol rejection. Transport failures say nothing about the token.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::KeyFetchTimeout | Error::UserinfoTimeout)
    }
}

/// Result type alias for validation operations
pub type Result<T> = std::result::Result<T, Error>;
