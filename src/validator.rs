//! Validation orchestration
//!
//! [`RelyingParty`] ties the components together: key resolution, signature
//! verification, claims validation, hash binding, and the userinfo leg. One
//! call produces one [`ValidationOutcome`]; nothing is retried, and the
//! first failing check determines the rejection.

use crate::algorithm::verify_signature;
use crate::binding;
use crate::claims::{ClaimsValidator, ValidationContext};
use crate::clock::{Clock, SystemClock};
use crate::config::{Flow, FlowConfig};
use crate::discovery::DiscoveryDocument;
use crate::error::{Error, Result};
use crate::jwks::KeyStore;
use crate::token::{ParsedToken, VerifiedToken};
use crate::userinfo;

/// The terminal result of one validation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    accepted: bool,
    failure: Option<Error>,
    subject: Option<String>,
}

impl ValidationOutcome {
    fn accept(subject: String) -> Self {
        Self {
            accepted: true,
            failure: None,
            subject: Some(subject),
        }
    }

    fn reject(failure: Error) -> Self {
        Self {
            accepted: false,
            failure: Some(failure),
            subject: None,
        }
    }

    /// Whether the token or userinfo leg was accepted
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// The single failure that caused the rejection, if any
    pub fn failure_kind(&self) -> Option<&Error> {
        self.failure.as_ref()
    }

    /// The authenticated subject, present only on acceptance
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Whether the failure was a transport failure rather than a rejection
    pub fn is_transport_failure(&self) -> bool {
        self.failure.as_ref().is_some_and(Error::is_transport)
    }

    /// Wrap a collaborator's transport error into an outcome
    ///
    /// Callers that fetch the JWK set or call the userinfo endpoint map
    /// their timeouts through here so downstream code sees one outcome type.
    pub fn from_transport_error(error: Error) -> Self {
        Self::reject(error)
    }
}

/// A configured Relying Party session for one provider
///
/// Immutable after construction and safe to share across threads; every
/// validation call is independent.
pub struct RelyingParty {
    discovery: DiscoveryDocument,
    keys: KeyStore,
    config: FlowConfig,
    clock: Box<dyn Clock>,
    allow_unsigned: bool,
}

impl RelyingParty {
    /// Build a session from provider metadata, its raw JWK set document,
    /// and the flow configuration
    ///
    /// The flow configuration is checked here so that misconfiguration
    /// surfaces at construction, not in the middle of a login.
    pub fn new(
        discovery: DiscoveryDocument,
        jwks_bytes: &[u8],
        config: FlowConfig,
    ) -> Result<Self> {
        config.validate()?;
        let keys = KeyStore::from_jwks_bytes(jwks_bytes)?;
        Ok(Self {
            discovery,
            keys,
            config,
            clock: Box::new(SystemClock),
            allow_unsigned: false,
        })
    }

    /// Replace the time source, for deterministic validation in tests
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Accept tokens with `alg: none`
    ///
    /// Off by default. Only meaningful against providers that are known to
    /// issue unsigned ID Tokens; unsigned tokens skip hash binding because
    /// they declare no digest strength.
    pub fn allow_unsigned_tokens(mut self) -> Self {
        self.allow_unsigned = true;
        self
    }

    /// The provider metadata this session was built from
    pub fn discovery(&self) -> &DiscoveryDocument {
        &self.discovery
    }

    /// The loaded key store
    pub fn keys(&self) -> &KeyStore {
        &self.keys
    }

    /// A validation context seeded with this provider's issuer
    pub fn context(&self, client_id: impl Into<String>) -> ValidationContext {
        ValidationContext::new(self.discovery.issuer.clone(), client_id)
    }

    /// Validate an ID Token against the context
    pub fn validate_id_token(&self, token: &str, context: &ValidationContext) -> ValidationOutcome {
        match self.run_id_token_checks(token, context) {
            Ok(subject) => ValidationOutcome::accept(subject),
            Err(error) => {
                tracing::debug!(%error, "id token rejected");
                ValidationOutcome::reject(error)
            }
        }
    }

    /// Validate a userinfo exchange: the outgoing request must carry the
    /// access token as a Bearer header, and the response subject must match
    /// the ID Token subject
    pub fn validate_userinfo<T>(
        &self,
        request: &http::Request<T>,
        response_body: &[u8],
        expected_subject: &str,
    ) -> ValidationOutcome {
        let result = userinfo::extract_bearer_token(request)
            .and_then(|_| userinfo::check_subject(response_body, expected_subject));
        match result {
            Ok(subject) => ValidationOutcome::accept(subject),
            Err(error) => {
                tracing::debug!(%error, "userinfo rejected");
                ValidationOutcome::reject(error)
            }
        }
    }

    fn run_id_token_checks(&self, token: &str, context: &ValidationContext) -> Result<String> {
        let parsed = ParsedToken::from_compact(token)?;
        let verified = self.verify(parsed)?;

        let claims = verified.parse_claims()?;
        ClaimsValidator::validate(
            &claims,
            context,
            self.config.require_nonce,
            self.clock.unix_now(),
        )?;

        if let Some(algorithm) = verified.algorithm() {
            if let Some(code) = context.returned_code.as_deref() {
                // Hybrid responses must bind the code; otherwise the claim
                // is checked whenever the provider sent one
                if self.config.flow == Flow::Hybrid || claims.c_hash.is_some() {
                    binding::verify_c_hash(code, claims.c_hash.as_deref(), algorithm)?;
                }
            }
            if let Some(access_token) = context.returned_access_token.as_deref() {
                if self.config.flow == Flow::Implicit || claims.at_hash.is_some() {
                    binding::verify_at_hash(access_token, claims.at_hash.as_deref(), algorithm)?;
                }
            }
        }

        claims.sub.filter(|s| !s.is_empty()).ok_or(Error::SubjectMissing)
    }

    fn verify(&self, parsed: ParsedToken) -> Result<VerifiedToken> {
        if parsed.header().is_unsigned() {
            if self.allow_unsigned {
                tracing::warn!("accepting unsigned token by explicit configuration");
                return Ok(VerifiedToken::unsigned(parsed));
            }
            return Err(Error::NoneAlgorithmRejected);
        }

        let candidates = self.keys.resolve(parsed.key_id());
        if candidates.is_empty() {
            if let Some(kid) = parsed.key_id() {
                return Err(Error::UnknownKey(kid.to_string()));
            }
            return Err(Error::NoMatchingKey);
        }

        verify_signature(parsed, &candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_accept_carries_subject() {
        let outcome = ValidationOutcome::accept("user-1".to_string());
        assert!(outcome.is_accepted());
        assert_eq!(outcome.subject(), Some("user-1"));
        assert!(outcome.failure_kind().is_none());
        assert!(!outcome.is_transport_failure());
    }

    #[test]
    fn outcome_reject_carries_exactly_one_failure() {
        let outcome = ValidationOutcome::reject(Error::BadSignature);
        assert!(!outcome.is_accepted());
        assert!(outcome.subject().is_none());
        assert_eq!(outcome.failure_kind(), Some(&Error::BadSignature));
    }

    #[test]
    fn transport_failures_are_distinguished() {
        let timeout = ValidationOutcome::from_transport_error(Error::KeyFetchTimeout);
        assert!(timeout.is_transport_failure());
        assert!(!timeout.is_accepted());

        let rejection = ValidationOutcome::reject(Error::NonceMismatch);
        assert!(!rejection.is_transport_failure());
    }
}
