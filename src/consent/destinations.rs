//! Per-claim token destination routing.
//!
//! Claims are not automatically included in issued tokens: each claim must
//! be routed to the token types it may appear in. The router is a pure,
//! total function invoked once per claim at token-emission time, outside
//! this crate. The result is always 0, 1, or 2 destinations, known
//! synchronously.
//!
//! Identity-token visibility is gated by the granted scopes: `profile`
//! unlocks the name claims, `email` the email claim, `roles` the role
//! claims. The security stamp is a secret and is never routed anywhere.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::consent::claims;

/// Token types a claim may be embedded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// The OAuth 2.0 access token.
    AccessToken,
    /// The OpenID Connect identity token.
    IdentityToken,
}

impl Destination {
    /// Returns the canonical string representation of the destination.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccessToken => "access_token",
            Self::IdentityToken => "id_token",
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Routes a claim to the token types it may appear in.
///
/// Rules are evaluated as an ordered match, first match wins:
///
/// 1. `name` / `preferred_username`: access token; identity token too iff
///    `profile` is granted
/// 2. `email`: access token; identity token too iff `email` is granted
/// 3. `role`: access token; identity token too iff `roles` is granted
/// 4. `security_stamp`: nothing
/// 5. anything else: access token only
///
/// Deterministic and side-effect-free.
#[must_use]
pub fn destinations(claim_type: &str, granted_scopes: &BTreeSet<String>) -> Vec<Destination> {
    let with_identity = |scope: &str| {
        if granted_scopes.contains(scope) {
            vec![Destination::AccessToken, Destination::IdentityToken]
        } else {
            vec![Destination::AccessToken]
        }
    };

    match claim_type {
        claims::NAME | claims::PREFERRED_USERNAME => with_identity(claims::scopes::PROFILE),
        claims::EMAIL => with_identity(claims::scopes::EMAIL),
        claims::ROLE => with_identity(claims::scopes::ROLES),
        // The security stamp is a secret value and must never be
        // serialized into any issued token.
        claims::SECURITY_STAMP => Vec::new(),
        _ => vec![Destination::AccessToken],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope_set(scopes: &[&str]) -> BTreeSet<String> {
        scopes.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_name_claims_follow_profile_scope() {
        for claim in [claims::NAME, claims::PREFERRED_USERNAME] {
            assert_eq!(
                destinations(claim, &scope_set(&[])),
                vec![Destination::AccessToken]
            );
            assert_eq!(
                destinations(claim, &scope_set(&["openid", "profile"])),
                vec![Destination::AccessToken, Destination::IdentityToken]
            );
        }
    }

    #[test]
    fn test_email_claim_follows_email_scope() {
        assert_eq!(
            destinations(claims::EMAIL, &scope_set(&[])),
            vec![Destination::AccessToken]
        );
        assert_eq!(
            destinations(claims::EMAIL, &scope_set(&["email"])),
            vec![Destination::AccessToken, Destination::IdentityToken]
        );
        // Other scopes do not unlock the email claim.
        assert_eq!(
            destinations(claims::EMAIL, &scope_set(&["profile", "roles"])),
            vec![Destination::AccessToken]
        );
    }

    #[test]
    fn test_role_claim_follows_roles_scope() {
        assert_eq!(
            destinations(claims::ROLE, &scope_set(&["roles"])),
            vec![Destination::AccessToken, Destination::IdentityToken]
        );
        assert_eq!(
            destinations(claims::ROLE, &scope_set(&["profile"])),
            vec![Destination::AccessToken]
        );
    }

    #[test]
    fn test_security_stamp_never_routed() {
        assert!(destinations(claims::SECURITY_STAMP, &scope_set(&[])).is_empty());
        assert!(
            destinations(
                claims::SECURITY_STAMP,
                &scope_set(&["openid", "profile", "email", "roles"])
            )
            .is_empty()
        );
    }

    #[test]
    fn test_default_claims_access_token_only() {
        for claim in [claims::SUBJECT, "custom_claim", ""] {
            assert_eq!(
                destinations(claim, &scope_set(&["profile", "email", "roles"])),
                vec![Destination::AccessToken]
            );
        }
    }

    #[test]
    fn test_destination_as_str() {
        assert_eq!(Destination::AccessToken.as_str(), "access_token");
        assert_eq!(Destination::IdentityToken.as_str(), "id_token");
    }
}
