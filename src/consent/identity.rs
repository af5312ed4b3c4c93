//! Identity assembly for approved authorizations.
//!
//! Once a request is approved, the assembler builds the claim set that the
//! token issuer embeds in issued tokens, resolves the protected resources
//! unlocked by the granted scopes, and associates the claim set with a
//! permanent authorization grant (reusing an existing one when possible).
//!
//! Grant creation is the only state-mutating step in the crate and is
//! idempotent in effect: re-approval against an already-sufficient grant
//! performs no write.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ConsentResult;
use crate::consent::claims;
use crate::storage::{AuthorizationStore, ScopeResolver};
use crate::types::{AuthorizationGrant, ClientApplication, GrantType, Subject};

// =============================================================================
// Claim
// =============================================================================

/// A single claim entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Claim type, e.g. `sub` or `email`.
    pub claim_type: String,

    /// Claim value.
    pub value: String,
}

impl Claim {
    /// Creates a new claim.
    #[must_use]
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// Claim Set
// =============================================================================

/// Token-ready identity built for an approved authorization.
///
/// Built fresh per decision and never mutated after assembly. The claim
/// order is stable: subject, email, name, preferred username, then one
/// role claim per role.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSet {
    /// Ordered claims to be embedded in issued tokens, each routed through
    /// the destination router at emission time.
    pub claims: Vec<Claim>,

    /// Granted scopes. Always exactly the requested scopes - this engine
    /// never silently narrows a request.
    pub scopes: BTreeSet<String>,

    /// Protected resources unlocked by the granted scopes.
    pub resources: BTreeSet<String>,

    /// Identifier of the authorization grant backing this identity.
    pub authorization_id: Uuid,
}

// =============================================================================
// Identity Assembler
// =============================================================================

/// Builds claim sets for approved authorizations.
pub struct IdentityAssembler {
    /// Grant storage, written to when no reusable grant exists.
    authorizations: Arc<dyn AuthorizationStore>,

    /// Resolver mapping granted scopes to protected resources.
    scope_resolver: Arc<dyn ScopeResolver>,
}

impl IdentityAssembler {
    /// Creates a new identity assembler.
    #[must_use]
    pub fn new(
        authorizations: Arc<dyn AuthorizationStore>,
        scope_resolver: Arc<dyn ScopeResolver>,
    ) -> Self {
        Self {
            authorizations,
            scope_resolver,
        }
    }

    /// Assembles the claim set for an approved authorization.
    ///
    /// Grant resolution: when `reusable_grant` is present its identifier is
    /// reused; otherwise a new permanent grant is created for the requested
    /// scopes so future requests with the same scopes skip the consent
    /// step.
    ///
    /// # Errors
    ///
    /// Returns an error if resource resolution or grant creation fails.
    pub async fn assemble(
        &self,
        subject: &Subject,
        client: &ClientApplication,
        scopes: &BTreeSet<String>,
        reusable_grant: Option<&AuthorizationGrant>,
    ) -> ConsentResult<ClaimSet> {
        let mut claim_entries = vec![
            Claim::new(claims::SUBJECT, &subject.id),
            Claim::new(claims::EMAIL, &subject.email),
            Claim::new(claims::NAME, &subject.display_name),
            Claim::new(claims::PREFERRED_USERNAME, &subject.display_name),
        ];
        claim_entries.extend(
            subject
                .roles
                .iter()
                .map(|role| Claim::new(claims::ROLE, role)),
        );

        let resources = self.scope_resolver.resources_for(scopes).await?;

        let authorization_id = match reusable_grant {
            Some(grant) => grant.id,
            None => {
                let grant = self
                    .authorizations
                    .create(&subject.id, &client.id, GrantType::Permanent, scopes)
                    .await?;
                tracing::debug!(
                    subject_id = %subject.id,
                    client_id = %client.id,
                    grant_id = %grant.id,
                    "created permanent authorization grant"
                );
                grant.id
            }
        };

        Ok(ClaimSet {
            claims: claim_entries,
            scopes: scopes.clone(),
            resources,
            authorization_id,
        })
    }
}
