//! Authorization grant storage contract.
//!
//! # Implementation Notes
//!
//! Implementations should:
//!
//! - Support efficient lookup by (subject_id, client_id)
//! - Store scopes as an array for superset filtering
//! - Make `create` safe under concurrent duplicate attempts (idempotent
//!   upsert or unique-constraint dedup): the engine does not serialize
//!   concurrent requests for the same (subject, client) pair, so two
//!   near-simultaneous approvals may both attempt to create a grant for
//!   the same scope set
//!
//! No ordering guarantee is required from `find`; the engine selects the
//! most recently created grant by its `created_at` timestamp.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::ConsentResult;
use crate::types::{AuthorizationGrant, GrantStatus, GrantType};

/// Storage contract for authorization grants.
#[async_trait]
pub trait AuthorizationStore: Send + Sync {
    /// Finds grants for a (subject, client) pair matching the given status
    /// and type whose scopes cover all of `scopes`.
    ///
    /// Only grants with `grant.scopes ⊇ scopes` are returned, so a
    /// returned grant is sufficient for the request by construction of
    /// the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    async fn find(
        &self,
        subject_id: &str,
        client_id: &str,
        status: GrantStatus,
        grant_type: GrantType,
        scopes: &BTreeSet<String>,
    ) -> ConsentResult<Vec<AuthorizationGrant>>;

    /// Creates a new grant and returns it with its freshly assigned
    /// identifier and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached or the write fails.
    async fn create(
        &self,
        subject_id: &str,
        client_id: &str,
        grant_type: GrantType,
        scopes: &BTreeSet<String>,
    ) -> ConsentResult<AuthorizationGrant>;
}
