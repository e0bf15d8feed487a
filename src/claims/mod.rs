//! ID Token claims

mod validator;

pub use validator::{ClaimsValidator, ValidationContext, DEFAULT_CLOCK_SKEW};

use serde::Deserialize;

/// The `aud` claim, which OIDC allows as a single string or an array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    Single(String),
    Multiple(Vec<String>),
}

impl Audience {
    /// Whether the audience includes the given client id
    pub fn contains(&self, client_id: &str) -> bool {
        match self {
            Audience::Single(aud) => aud == client_id,
            Audience::Multiple(auds) => auds.iter().any(|aud| aud == client_id),
        }
    }

    /// Number of audience entries
    pub fn len(&self) -> usize {
        match self {
            Audience::Single(_) => 1,
            Audience::Multiple(auds) => auds.len(),
        }
    }

    /// Whether the audience list is empty (an empty `aud` array)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Claims of an ID Token payload
///
/// Every field is optional at the parse stage; presence requirements are
/// enforced by [`ClaimsValidator`], which maps each absence to its own
/// rejection kind.
#[derive(Debug, Clone, Deserialize)]
pub struct IdTokenClaims {
    /// Issuer identifier
    pub iss: Option<String>,
    /// Subject identifier
    pub sub: Option<String>,
    /// Audience(s) the token is intended for
    pub aud: Option<Audience>,
    /// Expiration time (Unix seconds)
    pub exp: Option<i64>,
    /// Issued-at time (Unix seconds)
    pub iat: Option<i64>,
    /// Replay-protection nonce echoed from the authentication request
    pub nonce: Option<String>,
    /// Authorized party, required when `aud` has several entries
    pub azp: Option<String>,
    /// Authorization code hash binding
    pub c_hash: Option<String>,
    /// Access token hash binding
    pub at_hash: Option<String>,
    /// End-user authentication time
    pub auth_time: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audience_parses_from_string() {
        let claims: IdTokenClaims = serde_json::from_str(r#"{"aud":"client-1"}"#).unwrap();
        let aud = claims.aud.unwrap();
        assert!(aud.contains("client-1"));
        assert!(!aud.contains("client-2"));
        assert_eq!(aud.len(), 1);
    }

    #[test]
    fn audience_parses_from_array() {
        let claims: IdTokenClaims =
            serde_json::from_str(r#"{"aud":["client-1","client-2"]}"#).unwrap();
        let aud = claims.aud.unwrap();
        assert!(aud.contains("client-2"));
        assert!(!aud.contains("client-3"));
        assert_eq!(aud.len(), 2);
    }

    #[test]
    fn unknown_claims_are_ignored() {
        let claims: IdTokenClaims = serde_json::from_str(
            r#"{"iss":"https://op","sub":"s","acr":"urn:x","amr":["pwd"]}"#,
        )
        .unwrap();
        assert_eq!(claims.iss.as_deref(), Some("https://op"));
        assert!(claims.aud.is_none());
    }
}
