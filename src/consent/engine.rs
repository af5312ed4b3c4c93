//! Consent decision engine.
//!
//! The engine walks a single authorization request through a fixed sequence
//! of states: authentication check, client resolution, grant lookup, and
//! the consent decision table. Each external call sits at a state boundary;
//! no two collaborator calls are ever in flight at once for one request,
//! and no state is kept between invocations beyond the authorization store.
//!
//! Interactive consent re-enters the engine through
//! [`ConsentEngine::accept_interactive`] and
//! [`ConsentEngine::reject_interactive`] once the user has answered. The
//! accept path is reachable independently of the initial evaluation, so it
//! re-derives the session, client, and grant state instead of trusting
//! anything round-tripped through the client.
//!
//! # Usage
//!
//! ```ignore
//! use oidc_consent::{ConsentConfig, ConsentEngine, Decision};
//!
//! let engine = ConsentEngine::new(clients, authorizations, scope_resolver, ConsentConfig::default());
//!
//! match engine.evaluate(&request, session.as_ref()).await? {
//!     Decision::Approved(claim_set) => issue_tokens(claim_set),
//!     Decision::Denied(reason) => redirect_error(reason.error_code(), reason.description()),
//!     Decision::AwaitingConsent(parameters) => render_consent_page(parameters),
//! }
//! ```

use std::sync::Arc;

use time::{Duration, OffsetDateTime};

use crate::ConsentResult;
use crate::config::ConsentConfig;
use crate::consent::decision::{Decision, DenialReason, TableOutcome, decide};
use crate::consent::identity::IdentityAssembler;
use crate::error::ConsentError;
use crate::storage::{AuthorizationStore, ClientDirectory, ScopeResolver, SessionContext};
use crate::types::{
    AuthorizationGrant, AuthorizationRequest, ClientApplication, ConsentType, GrantStatus,
    GrantType, Subject,
};

/// Consent decision engine for authorization requests.
///
/// Holds the collaborator contracts and the identity assembler; all state
/// lives in the authorization store.
pub struct ConsentEngine {
    /// Directory of registered client applications.
    clients: Arc<dyn ClientDirectory>,

    /// Store of persisted authorization grants.
    authorizations: Arc<dyn AuthorizationStore>,

    /// Assembler invoked on the approval path.
    assembler: IdentityAssembler,

    /// Engine configuration.
    config: ConsentConfig,
}

impl ConsentEngine {
    /// Creates a new consent engine.
    ///
    /// # Arguments
    ///
    /// * `clients` - Directory of registered client applications
    /// * `authorizations` - Store of persisted authorization grants
    /// * `scope_resolver` - Resolver mapping scopes to protected resources
    /// * `config` - Engine configuration
    #[must_use]
    pub fn new(
        clients: Arc<dyn ClientDirectory>,
        authorizations: Arc<dyn AuthorizationStore>,
        scope_resolver: Arc<dyn ScopeResolver>,
        config: ConsentConfig,
    ) -> Self {
        let assembler = IdentityAssembler::new(authorizations.clone(), scope_resolver);
        Self {
            clients,
            authorizations,
            assembler,
            config,
        }
    }

    /// Evaluates an authorization request.
    ///
    /// Applies the consent decision table over the client's consent type,
    /// the existing permanent grants, and the request's prompts:
    ///
    /// - `Approved` - a token-ready claim set was minted, reusing the most
    ///   recently created sufficient grant or creating a new permanent one
    /// - `Denied` - the request cannot proceed; the reason says whether to
    ///   re-challenge authentication or return an OAuth error
    /// - `AwaitingConsent` - the caller must render the consent page and
    ///   later re-enter through [`accept_interactive`] or
    ///   [`reject_interactive`]
    ///
    /// [`accept_interactive`]: Self::accept_interactive
    /// [`reject_interactive`]: Self::reject_interactive
    ///
    /// # Errors
    ///
    /// Returns an error if the client is not registered
    /// (`UpstreamLookup`) or a collaborator call fails.
    pub async fn evaluate(
        &self,
        request: &AuthorizationRequest,
        session: &dyn SessionContext,
    ) -> ConsentResult<Decision> {
        // 1. Authentication check, honoring max_age.
        let Some(subject) = self.authenticate(session, request.max_age).await? else {
            return Ok(Decision::Denied(DenialReason::ReauthenticationRequired));
        };

        // 2. Resolve the client registration.
        let client = self.resolve_client(&request.client_id).await?;

        // 3. Fetch the permanent grants sufficient for the request.
        let grants = self
            .find_matching_grants(&subject, &client, request)
            .await?;

        // 4. Apply the decision table.
        match decide(client.consent_type, !grants.is_empty(), &request.prompts) {
            TableOutcome::Approve => {
                let reusable = most_recent(grants);
                let claim_set = self
                    .assembler
                    .assemble(&subject, &client, &request.scopes, reusable.as_ref())
                    .await?;
                tracing::debug!(
                    subject_id = %subject.id,
                    client_id = %client.id,
                    reused_grant = reusable.is_some(),
                    "authorization request approved"
                );
                Ok(Decision::Approved(claim_set))
            }
            TableOutcome::Deny => {
                tracing::debug!(
                    subject_id = %subject.id,
                    client_id = %client.id,
                    consent_type = %client.consent_type,
                    "authorization request denied, consent required"
                );
                Ok(Decision::Denied(DenialReason::ConsentRequired))
            }
            TableOutcome::RequireInteraction => {
                // Echo the raw parameters verbatim so the consent page can
                // resubmit the request unchanged.
                Ok(Decision::AwaitingConsent(request.parameters.clone()))
            }
        }
    }

    /// Processes an explicit consent acceptance from the interactive step.
    ///
    /// This entry point is reachable independently of [`evaluate`], so it
    /// re-checks the session and re-derives the grant state rather than
    /// trusting client-side round-trip data. The consent-type branch is not
    /// re-run, with one exception: a client with external consent is denied
    /// again when no grant exists, so a forged direct call to the accept
    /// action cannot mint an authorization the evaluation path would have
    /// refused.
    ///
    /// [`evaluate`]: Self::evaluate
    ///
    /// # Errors
    ///
    /// Returns an error if the client is not registered
    /// (`UpstreamLookup`) or a collaborator call fails.
    pub async fn accept_interactive(
        &self,
        request: &AuthorizationRequest,
        session: &dyn SessionContext,
    ) -> ConsentResult<Decision> {
        let Some(subject) = session.current_subject().await? else {
            return Ok(Decision::Denied(DenialReason::ReauthenticationRequired));
        };

        let client = self.resolve_client(&request.client_id).await?;

        let grants = self
            .find_matching_grants(&subject, &client, request)
            .await?;

        if grants.is_empty() && client.consent_type == ConsentType::External {
            tracing::warn!(
                subject_id = %subject.id,
                client_id = %client.id,
                "accept called for externally-consented client without a grant"
            );
            return Ok(Decision::Denied(DenialReason::ConsentRequired));
        }

        let reusable = most_recent(grants);
        let claim_set = self
            .assembler
            .assemble(&subject, &client, &request.scopes, reusable.as_ref())
            .await?;
        Ok(Decision::Approved(claim_set))
    }

    /// Processes an explicit consent rejection from the interactive step.
    ///
    /// Unconditional: the user's refusal stands regardless of consent type
    /// or grant history, and no lookups are performed.
    #[must_use]
    pub fn reject_interactive(&self) -> Decision {
        Decision::Denied(DenialReason::UserDeclined)
    }

    /// Checks the ambient session and enforces the `max_age` parameter.
    ///
    /// Returns `None` when no valid session exists or the session is too
    /// old; the caller turns that into a re-authentication challenge. A
    /// session without a recorded issuance time skips the age check.
    async fn authenticate(
        &self,
        session: &dyn SessionContext,
        max_age: Option<u64>,
    ) -> ConsentResult<Option<Subject>> {
        let Some(subject) = session.current_subject().await? else {
            return Ok(None);
        };

        if let Some(max_age) = max_age {
            if let Some(issued_at) = session.issued_at().await? {
                let age = OffsetDateTime::now_utc() - issued_at;
                let limit = Duration::seconds(i64::try_from(max_age).unwrap_or(i64::MAX))
                    + self.config.max_age_leeway;
                if age > limit {
                    tracing::debug!(
                        subject_id = %subject.id,
                        session_age_seconds = age.whole_seconds(),
                        max_age,
                        "session older than max_age, re-authentication required"
                    );
                    return Ok(None);
                }
            }
        }

        Ok(Some(subject))
    }

    /// Resolves the client registration or fails the request.
    async fn resolve_client(&self, client_id: &str) -> ConsentResult<ClientApplication> {
        self.clients
            .find_by_client_id(client_id)
            .await?
            .ok_or_else(|| {
                ConsentError::upstream_lookup(format!("client not found: {client_id}"))
            })
    }

    /// Fetches the valid permanent grants covering the requested scopes.
    async fn find_matching_grants(
        &self,
        subject: &Subject,
        client: &ClientApplication,
        request: &AuthorizationRequest,
    ) -> ConsentResult<Vec<AuthorizationGrant>> {
        self.authorizations
            .find(
                &subject.id,
                &client.id,
                GrantStatus::Valid,
                GrantType::Permanent,
                &request.scopes,
            )
            .await
    }

    /// Gets the engine configuration.
    #[must_use]
    pub fn config(&self) -> &ConsentConfig {
        &self.config
    }
}

/// Picks the most recently created grant. Qualifying grants are never
/// merged; stale ones are superseded in selection, not deleted.
fn most_recent(grants: Vec<AuthorizationGrant>) -> Option<AuthorizationGrant> {
    grants.into_iter().max_by_key(|grant| grant.created_at)
}
