//! Userinfo request and response checks
//!
//! The userinfo endpoint only accepts the access token as an
//! `Authorization: Bearer` header. Tokens riding the query string or a form
//! body are ignored; from this crate's point of view such a request simply
//! has no Authorization header.

use http::header::AUTHORIZATION;
use http::Request;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Extract the bearer token from a userinfo request
///
/// The scheme comparison is case-insensitive per RFC 7235; everything that
/// is not `Bearer <token>` is `WrongScheme`.
pub fn extract_bearer_token<T>(request: &Request<T>) -> Result<&str> {
    let header = match request.headers().get(AUTHORIZATION) {
        Some(header) => header,
        None => {
            if request.uri().query().is_some_and(|q| q.contains("access_token=")) {
                tracing::warn!("access token passed via query string is ignored");
            }
            return Err(Error::MissingAuthorizationHeader);
        }
    };

    let value = header
        .to_str()
        .map_err(|_| Error::WrongScheme("<non-ascii>".to_string()))?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("Bearer") => {
            let token = token.trim();
            if token.is_empty() {
                Err(Error::WrongScheme(scheme.to_string()))
            } else {
                Ok(token)
            }
        }
        Some((scheme, _)) => Err(Error::WrongScheme(scheme.to_string())),
        None => Err(Error::WrongScheme(value.to_string())),
    }
}

#[derive(Deserialize)]
struct UserinfoClaims {
    sub: Option<String>,
}

/// Check a userinfo response body against the ID Token subject
///
/// Returns the confirmed subject. A response claiming a different subject
/// must be treated as an attack on the session and rejected.
pub fn check_subject(body: &[u8], expected_subject: &str) -> Result<String> {
    let claims: UserinfoClaims = serde_json::from_slice(body)
        .map_err(|e| Error::InvalidJson(format!("failed to parse userinfo: {e}")))?;

    match claims.sub {
        None => Err(Error::SubjectMissing),
        Some(sub) if sub.is_empty() => Err(Error::SubjectMissing),
        Some(sub) if sub != expected_subject => Err(Error::SubjectMismatch {
            expected: expected_subject.to_string(),
            found: sub,
        }),
        Some(sub) => Ok(sub),
    }
}
