//! Scope resolver contract.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::ConsentResult;

/// Contract for mapping granted scopes to protected resources.
///
/// The scope/resource catalog is managed elsewhere; the engine only needs
/// the set of resources a final scope set unlocks, recorded on the claim
/// set for the token issuer.
#[async_trait]
pub trait ScopeResolver: Send + Sync {
    /// Returns the set of resources unlocked by the given scopes.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be reached.
    async fn resources_for(&self, scopes: &BTreeSet<String>) -> ConsentResult<BTreeSet<String>>;
}
