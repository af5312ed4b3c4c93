//! Authorization grant domain types.
//!
//! A grant records a permission the resource owner (or an administrator)
//! has given a client application for a set of scopes. Grants are persisted
//! by the external authorization store; this crate creates new permanent
//! grants on approval and reuses existing ones on lookup. Stale grants are
//! never deleted here, only superseded in selection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

// =============================================================================
// Grant Status
// =============================================================================

/// Lifecycle status of an authorization grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantStatus {
    /// The grant is active and may satisfy new authorization requests.
    Valid,
    /// The grant has been revoked and must be ignored.
    Revoked,
}

impl GrantStatus {
    /// Returns the canonical string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Revoked => "revoked",
        }
    }
}

// =============================================================================
// Grant Type
// =============================================================================

/// Kind of authorization grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    /// Long-lived grant reused across authorization requests to skip the
    /// consent step.
    Permanent,
    /// One-off grant tied to a single authorization, never reused.
    AdHoc,
}

impl GrantType {
    /// Returns the canonical string representation of the grant type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Permanent => "permanent",
            Self::AdHoc => "ad_hoc",
        }
    }
}

// =============================================================================
// Authorization Grant
// =============================================================================

/// A persisted authorization grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationGrant {
    /// Unique grant identifier, embedded in issued tokens as the
    /// authorization id.
    pub id: Uuid,

    /// Subject the grant was given by.
    pub subject_id: String,

    /// Client application the grant was given to.
    pub client_id: String,

    /// Lifecycle status.
    pub status: GrantStatus,

    /// Grant kind.
    pub grant_type: GrantType,

    /// Scopes covered by the grant.
    pub scopes: BTreeSet<String>,

    /// Timestamp when the grant was created. Used to pick the most
    /// recently created grant when several qualify.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl AuthorizationGrant {
    /// Returns `true` if this grant's scopes cover all of the requested
    /// scopes.
    ///
    /// A grant is only reusable when its scopes are a superset of (or equal
    /// to) the requested set.
    #[must_use]
    pub fn covers(&self, requested: &BTreeSet<String>) -> bool {
        requested.is_subset(&self.scopes)
    }

    /// Returns `true` if this grant may satisfy new authorization requests.
    #[must_use]
    pub fn is_reusable(&self) -> bool {
        self.status == GrantStatus::Valid && self.grant_type == GrantType::Permanent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope_set(scopes: &[&str]) -> BTreeSet<String> {
        scopes.iter().map(|s| (*s).to_string()).collect()
    }

    fn grant(scopes: &[&str]) -> AuthorizationGrant {
        AuthorizationGrant {
            id: Uuid::new_v4(),
            subject_id: "u1".to_string(),
            client_id: "c1".to_string(),
            status: GrantStatus::Valid,
            grant_type: GrantType::Permanent,
            scopes: scope_set(scopes),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn test_covers_superset() {
        let grant = grant(&["openid", "profile", "email"]);
        assert!(grant.covers(&scope_set(&["openid", "profile"])));
        assert!(grant.covers(&scope_set(&["openid", "profile", "email"])));
        assert!(!grant.covers(&scope_set(&["openid", "roles"])));
    }

    #[test]
    fn test_covers_empty_request() {
        let grant = grant(&["openid"]);
        assert!(grant.covers(&BTreeSet::new()));
    }

    #[test]
    fn test_is_reusable() {
        let mut g = grant(&["openid"]);
        assert!(g.is_reusable());

        g.status = GrantStatus::Revoked;
        assert!(!g.is_reusable());

        g.status = GrantStatus::Valid;
        g.grant_type = GrantType::AdHoc;
        assert!(!g.is_reusable());
    }

    #[test]
    fn test_grant_serde() {
        let g = grant(&["openid"]);
        let json = serde_json::to_string(&g).unwrap();
        assert!(json.contains(r#""status":"valid""#));
        assert!(json.contains(r#""grantType":"permanent""#));

        let parsed: AuthorizationGrant = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, g.id);
        assert_eq!(parsed.scopes, g.scopes);
    }
}
