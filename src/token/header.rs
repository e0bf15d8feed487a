//! JOSE header of an ID Token

use serde::Deserialize;

use crate::algorithm::AlgorithmId;
use crate::error::Result;

/// Decoded JOSE header
#[derive(Debug, Clone, Deserialize)]
pub struct TokenHeader {
    /// Signing algorithm identifier
    pub alg: String,
    /// Key ID hint for JWK set resolution
    pub kid: Option<String>,
    /// Token type, usually "JWT"
    pub typ: Option<String>,
}

impl TokenHeader {
    /// Parse the `alg` value into a supported algorithm
    pub fn parse_algorithm(&self) -> Result<AlgorithmId> {
        AlgorithmId::from_str(&self.alg)
    }

    /// Whether the header declares the unsigned `none` algorithm
    pub fn is_unsigned(&self) -> bool {
        self.alg == "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn parses_algorithm() {
        let header: TokenHeader =
            serde_json::from_str(r#"{"alg":"RS256","kid":"k1","typ":"JWT"}"#).unwrap();
        assert_eq!(header.parse_algorithm().unwrap(), AlgorithmId::RS256);
        assert_eq!(header.kid.as_deref(), Some("k1"));
        assert!(!header.is_unsigned());
    }

    #[test]
    fn none_header_is_unsigned() {
        let header: TokenHeader = serde_json::from_str(r#"{"alg":"none"}"#).unwrap();
        assert!(header.is_unsigned());
        assert_eq!(
            header.parse_algorithm(),
            Err(Error::NoneAlgorithmRejected)
        );
    }
}
