//! Flow configuration

use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// OIDC authentication flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    AuthorizationCode,
    Implicit,
    Hybrid,
}

impl Flow {
    /// Whether the authorization response carries a code next to the ID Token
    pub fn returns_code(&self) -> bool {
        matches!(self, Flow::AuthorizationCode | Flow::Hybrid)
    }

    /// Whether the flow mandates a nonce in the authentication request
    pub fn requires_nonce(&self) -> bool {
        matches!(self, Flow::Implicit | Flow::Hybrid)
    }
}

/// Per-session flow configuration, validated once at session construction
#[derive(Debug, Clone)]
pub struct FlowConfig {
    pub flow: Flow,
    pub scopes: BTreeSet<String>,
    pub require_nonce: bool,
}

impl FlowConfig {
    /// Configuration for a flow with the `openid` scope and the nonce
    /// requirement the flow mandates
    pub fn new(flow: Flow) -> Self {
        let mut scopes = BTreeSet::new();
        scopes.insert("openid".to_string());
        Self {
            flow,
            scopes,
            require_nonce: flow.requires_nonce(),
        }
    }

    /// Add a scope to request
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.insert(scope.into());
        self
    }

    /// Require a nonce even where the flow does not mandate one
    pub fn require_nonce(mut self) -> Self {
        self.require_nonce = true;
        self
    }

    /// Check internal consistency
    ///
    /// `openid` must be among the scopes, and implicit/hybrid sessions
    /// cannot opt out of the nonce requirement.
    pub fn validate(&self) -> Result<()> {
        if !self.scopes.contains("openid") {
            return Err(Error::InvalidConfiguration(
                "scopes must contain 'openid'".to_string(),
            ));
        }
        if self.flow.requires_nonce() && !self.require_nonce {
            return Err(Error::InvalidConfiguration(format!(
                "{:?} flow requires a nonce",
                self.flow
            )));
        }
        Ok(())
    }

    /// Space-separated scope string for the authentication request
    pub fn scope_string(&self) -> String {
        self.scopes.iter().cloned().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        for flow in [Flow::AuthorizationCode, Flow::Implicit, Flow::Hybrid] {
            assert!(FlowConfig::new(flow).validate().is_ok());
        }
    }

    #[test]
    fn hybrid_requires_nonce_by_default() {
        let config = FlowConfig::new(Flow::Hybrid);
        assert!(config.require_nonce);

        let mut config = config;
        config.require_nonce = false;
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn code_flow_can_skip_nonce() {
        let mut config = FlowConfig::new(Flow::AuthorizationCode);
        config.require_nonce = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn openid_scope_is_mandatory() {
        let mut config = FlowConfig::new(Flow::Hybrid);
        config.scopes.remove("openid");
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn scope_string_is_space_separated() {
        let config = FlowConfig::new(Flow::Hybrid).with_scope("profile");
        assert_eq!(config.scope_string(), "openid profile");
    }

    #[test]
    fn flow_artifact_expectations() {
        assert!(Flow::Hybrid.returns_code());
        assert!(Flow::AuthorizationCode.returns_code());
        assert!(!Flow::Implicit.returns_code());
        assert!(Flow::Implicit.requires_nonce());
        assert!(!Flow::AuthorizationCode.requires_nonce());
    }
}
