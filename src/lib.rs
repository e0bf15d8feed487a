//! ID Token validation for OpenID Connect Relying Parties
//!
//! This crate is the verification core of an OIDC client: it takes the
//! provider's published metadata and JWK set plus the raw artifacts of an
//! authentication response, and decides whether to accept the ID Token and
//! the userinfo exchange.
//!
//! The pipeline is fail-fast and fail-closed:
//!
//! 1. Parse the compact token; identify the algorithm (`none` is rejected).
//! 2. Resolve candidate keys by `kid`; without a `kid`, trial-verify
//!    against every published key.
//! 3. Verify the signature with aws-lc-rs.
//! 4. Validate claims in a fixed order: issuer, audience, expiry,
//!    issued-at, nonce, subject.
//! 5. Check `c_hash` / `at_hash` bindings against the code and access token
//!    returned next to the ID Token.
//!
//! Claims are only readable from a signature-verified token, so the type
//! system rules out acting on unverified claim values.
//!
//! # Example
//!
//! ```no_run
//! use oidc_rp::{DiscoveryDocument, Flow, FlowConfig, RelyingParty};
//!
//! # fn run() -> oidc_rp::Result<()> {
//! # let (discovery_body, jwks_body): (Vec<u8>, Vec<u8>) = (Vec::new(), Vec::new());
//! # let (request_nonce, returned_code, id_token) =
//! #     (String::new(), String::new(), String::new());
//! let discovery = DiscoveryDocument::from_json_bytes(&discovery_body)?;
//! let rp = RelyingParty::new(discovery, &jwks_body, FlowConfig::new(Flow::Hybrid))?;
//!
//! let context = rp
//!     .context("my-client-id")
//!     .with_nonce(request_nonce)
//!     .with_code(returned_code);
//!
//! let outcome = rp.validate_id_token(&id_token, &context);
//! if outcome.is_accepted() {
//!     println!("logged in as {}", outcome.subject().unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Transport is a collaborator's job: the caller fetches the discovery
//! document, the JWK set, and the userinfo response, and hands the bytes
//! in. Timeouts map into outcomes through
//! [`ValidationOutcome::from_transport_error`].

pub mod algorithm;
pub mod binding;
pub mod claims;
pub mod clock;
pub mod config;
pub mod discovery;
pub mod error;
pub mod jwks;
pub mod keys;
pub mod token;
pub mod userinfo;
pub mod validator;

pub(crate) mod utils;

pub use algorithm::AlgorithmId;
pub use claims::{Audience, ClaimsValidator, IdTokenClaims, ValidationContext};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Flow, FlowConfig};
pub use discovery::DiscoveryDocument;
pub use error::{Error, Result};
pub use jwks::{Jwk, KeyStore, SigningKey};
pub use keys::{EcCurve, Key};
pub use token::{ParsedToken, TokenHeader, VerifiedToken};
pub use userinfo::{check_subject, extract_bearer_token};
pub use validator::{RelyingParty, ValidationOutcome};
