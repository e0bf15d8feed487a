//! Ordered claims validation

use crate::claims::IdTokenClaims;
use crate::error::{Error, Result};

/// Default clock skew tolerance in seconds
pub const DEFAULT_CLOCK_SKEW: u64 = 60;

/// Expectations for one validation attempt
///
/// Built per token exchange and read-only during validation. The returned
/// code and access token are the authorization-response artifacts that hash
/// binding checks run against.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    pub(crate) expected_issuer: String,
    pub(crate) expected_client_id: String,
    pub(crate) expected_nonce: Option<String>,
    pub(crate) returned_code: Option<String>,
    pub(crate) returned_access_token: Option<String>,
    pub(crate) clock_skew: u64,
}

impl ValidationContext {
    /// Expectations for a token from `issuer` addressed to `client_id`
    pub fn new(issuer: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            expected_issuer: issuer.into(),
            expected_client_id: client_id.into(),
            expected_nonce: None,
            returned_code: None,
            returned_access_token: None,
            clock_skew: DEFAULT_CLOCK_SKEW,
        }
    }

    /// Nonce sent in the authentication request
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.expected_nonce = Some(nonce.into());
        self
    }

    /// Authorization code returned alongside the ID Token
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.returned_code = Some(code.into());
        self
    }

    /// Access token returned alongside the ID Token
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.returned_access_token = Some(token.into());
        self
    }

    /// Clock skew tolerance in seconds (default 60)
    pub fn with_clock_skew(mut self, seconds: u64) -> Self {
        self.clock_skew = seconds;
        self
    }
}

/// Claims validator applying the OIDC Core rules in a fixed order
///
/// The order is part of the contract: issuer, audience, expiry, issued-at,
/// nonce, subject. The first failing rule determines the rejection and later
/// rules are not evaluated.
pub struct ClaimsValidator;

impl ClaimsValidator {
    /// Validate claims against the context at time `now`
    ///
    /// `require_nonce` comes from the flow configuration. When the flow
    /// requires a nonce but the context carries none to compare against, the
    /// check fails closed.
    pub fn validate(
        claims: &IdTokenClaims,
        context: &ValidationContext,
        require_nonce: bool,
        now: i64,
    ) -> Result<()> {
        let skew = context.clock_skew as i64;

        // 1. Issuer: exact string match, absent counts as mismatch
        if claims.iss.as_deref() != Some(context.expected_issuer.as_str()) {
            return Err(Error::IssuerMismatch {
                expected: context.expected_issuer.clone(),
                found: claims.iss.clone(),
            });
        }

        // 2. Audience must include the client id; with several audiences,
        //    azp must name the client when present
        match &claims.aud {
            Some(aud) if aud.contains(&context.expected_client_id) => {
                if aud.len() > 1 {
                    if let Some(azp) = &claims.azp {
                        if azp != &context.expected_client_id {
                            return Err(Error::AudienceMismatch {
                                client_id: context.expected_client_id.clone(),
                            });
                        }
                    }
                }
            }
            _ => {
                return Err(Error::AudienceMismatch {
                    client_id: context.expected_client_id.clone(),
                });
            }
        }

        // 3. Expiry: absent fails closed
        match claims.exp {
            Some(exp) if exp > now - skew => {}
            _ => {
                return Err(Error::Expired {
                    expired_at: claims.exp.unwrap_or(0),
                    now,
                });
            }
        }

        // 4. Issued-at: required, and not in the future beyond skew
        match claims.iat {
            None => return Err(Error::IssuedAtMissing),
            Some(iat) if iat > now + skew => {
                return Err(Error::IssuedAtImplausible {
                    issued_at: iat,
                    now,
                });
            }
            Some(_) => {}
        }

        // 5. Nonce
        match (&context.expected_nonce, &claims.nonce) {
            (Some(expected), Some(found)) if expected == found => {}
            (Some(_), _) => return Err(Error::NonceMismatch),
            (None, _) if require_nonce => return Err(Error::NonceMismatch),
            (None, _) => {}
        }

        // 6. Subject
        match claims.sub.as_deref() {
            Some(sub) if !sub.is_empty() => Ok(()),
            _ => Err(Error::SubjectMissing),
        }
    }
}
