//! Client directory contract.

use async_trait::async_trait;

use crate::ConsentResult;
use crate::types::ClientApplication;

/// Contract for resolving client application registrations.
///
/// Registration management (creation, secrets, redirect URIs) is out of
/// scope here; the engine only needs the registration record carrying the
/// client's consent policy and display name.
#[async_trait]
pub trait ClientDirectory: Send + Sync {
    /// Looks up a client application by its client identifier.
    ///
    /// Returns `None` if no registration exists. The engine treats a
    /// missing registration as a fatal upstream failure, never as a
    /// default policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be reached.
    async fn find_by_client_id(&self, client_id: &str) -> ConsentResult<Option<ClientApplication>>;
}
