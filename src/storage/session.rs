//! Authenticated session contract.

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::ConsentResult;
use crate::types::Subject;

/// Contract for the ambient authenticated session.
///
/// Supplied by the surrounding server's cookie/session authentication.
/// The engine only asks two questions: who is logged in, and since when.
/// A `None` subject means no valid session exists and the caller must
/// re-challenge authentication rather than fail the OAuth flow itself.
#[async_trait]
pub trait SessionContext: Send + Sync {
    /// Returns the authenticated subject, or `None` if no valid session
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the session backend cannot be reached.
    async fn current_subject(&self) -> ConsentResult<Option<Subject>>;

    /// Returns the timestamp at which the session was issued, or `None`
    /// if the backend does not record it.
    ///
    /// Used to honor the request's `max_age` parameter. A missing issuance
    /// timestamp disables the age check.
    ///
    /// # Errors
    ///
    /// Returns an error if the session backend cannot be reached.
    async fn issued_at(&self) -> ConsentResult<Option<OffsetDateTime>>;
}
