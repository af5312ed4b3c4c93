//! Authorization request parameters.
//!
//! The request is received and validated by the surrounding protocol server;
//! this crate treats it as immutable input. Scope strings are assumed to have
//! been validated upstream against the client registration - malformed scopes
//! are the client directory's concern.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// =============================================================================
// Prompt
// =============================================================================

/// OpenID Connect `prompt` parameter values.
///
/// Clients use prompts to control whether the authorization server may
/// interact with the user and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prompt {
    /// The server must not display any interactive page. If the request
    /// cannot be satisfied silently, it is denied.
    None,
    /// The user should be prompted to re-authenticate.
    Login,
    /// The user should be prompted for consent even if a sufficient grant
    /// already exists.
    Consent,
    /// The user should be prompted to select an account.
    SelectAccount,
}

impl Prompt {
    /// Returns the OIDC `prompt` parameter value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Login => "login",
            Self::Consent => "consent",
            Self::SelectAccount => "select_account",
        }
    }

    /// Parses an OIDC `prompt` parameter value.
    ///
    /// Returns `None` for unrecognized values; callers decide whether to
    /// ignore or reject them.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Self::None),
            "login" => Some(Self::Login),
            "consent" => Some(Self::Consent),
            "select_account" => Some(Self::SelectAccount),
            _ => None,
        }
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Authorization Request
// =============================================================================

/// An incoming authorization request.
///
/// Immutable once received. The `parameters` field carries the raw request
/// parameters as an ordered sequence of key/value pairs; the engine never
/// parses them, it only echoes them back verbatim when an interactive
/// consent step must resubmit the request unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationRequest {
    /// Client identifier of the requesting application.
    pub client_id: String,

    /// Requested scopes. Order-irrelevant and duplicate-free.
    pub scopes: BTreeSet<String>,

    /// Requested prompts from the `prompt` parameter.
    #[serde(default)]
    pub prompts: BTreeSet<Prompt>,

    /// Maximum acceptable session age in seconds, from the `max_age`
    /// parameter. When set, a session issued earlier than this many seconds
    /// ago forces re-authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u64>,

    /// Raw request parameters, preserved in arrival order.
    /// Opaque pass-through data for the interactive consent step.
    #[serde(default)]
    pub parameters: Vec<(String, String)>,
}

impl AuthorizationRequest {
    /// Creates a new authorization request.
    #[must_use]
    pub fn new(client_id: impl Into<String>, scopes: BTreeSet<String>) -> Self {
        Self {
            client_id: client_id.into(),
            scopes,
            prompts: BTreeSet::new(),
            max_age: None,
            parameters: Vec::new(),
        }
    }

    /// Sets the requested prompts.
    #[must_use]
    pub fn with_prompts(mut self, prompts: BTreeSet<Prompt>) -> Self {
        self.prompts = prompts;
        self
    }

    /// Sets the `max_age` parameter.
    #[must_use]
    pub fn with_max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    /// Attaches the raw request parameters for interactive pass-through.
    #[must_use]
    pub fn with_parameters(mut self, parameters: Vec<(String, String)>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Returns `true` if the request carries the given prompt.
    #[must_use]
    pub fn has_prompt(&self, prompt: Prompt) -> bool {
        self.prompts.contains(&prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope_set(scopes: &[&str]) -> BTreeSet<String> {
        scopes.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_prompt_as_str() {
        assert_eq!(Prompt::None.as_str(), "none");
        assert_eq!(Prompt::Login.as_str(), "login");
        assert_eq!(Prompt::Consent.as_str(), "consent");
        assert_eq!(Prompt::SelectAccount.as_str(), "select_account");
    }

    #[test]
    fn test_prompt_parse() {
        assert_eq!(Prompt::parse("none"), Some(Prompt::None));
        assert_eq!(Prompt::parse("login"), Some(Prompt::Login));
        assert_eq!(Prompt::parse("consent"), Some(Prompt::Consent));
        assert_eq!(Prompt::parse("select_account"), Some(Prompt::SelectAccount));
        assert_eq!(Prompt::parse("create"), None);
    }

    #[test]
    fn test_request_builder() {
        let request = AuthorizationRequest::new("c1", scope_set(&["openid", "profile"]))
            .with_prompts([Prompt::Consent].into())
            .with_max_age(60)
            .with_parameters(vec![("client_id".to_string(), "c1".to_string())]);

        assert_eq!(request.client_id, "c1");
        assert_eq!(request.scopes.len(), 2);
        assert!(request.has_prompt(Prompt::Consent));
        assert!(!request.has_prompt(Prompt::None));
        assert_eq!(request.max_age, Some(60));
        assert_eq!(request.parameters.len(), 1);
    }

    #[test]
    fn test_request_serde() {
        let request = AuthorizationRequest::new("c1", scope_set(&["openid"]))
            .with_prompts([Prompt::None].into());

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""clientId":"c1""#));
        assert!(json.contains(r#""prompts":["none"]"#));

        let parsed: AuthorizationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.client_id, "c1");
        assert!(parsed.has_prompt(Prompt::None));
        assert!(parsed.max_age.is_none());
    }
}
