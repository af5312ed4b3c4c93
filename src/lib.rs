//! # oidc-consent
//!
//! OAuth 2.0 / OpenID Connect authorization consent decision engine.
//!
//! This crate decides what happens when an already-authenticated user arrives
//! at the authorization endpoint: whether the request is silently denied,
//! silently approved (minting a token-ready claim set), or deferred to an
//! interactive consent step. It also builds the claim set embedded in issued
//! tokens and routes each claim to the token types it may appear in.
//!
//! The crate is invoked in-process by a surrounding protocol server. Session
//! authentication, client registration, page rendering, token signing, and
//! persistence internals are external collaborators consumed through the
//! narrow traits in [`storage`].
//!
//! ## Overview
//!
//! A single authorization request flows through three components:
//!
//! 1. [`ConsentEngine`](consent::ConsentEngine) evaluates the request against
//!    the client's consent type, the prompt parameters, and previously
//!    granted permanent authorizations.
//! 2. On the approval path, [`IdentityAssembler`](consent::IdentityAssembler)
//!    builds the [`ClaimSet`](consent::ClaimSet) and reuses or creates a
//!    permanent authorization grant.
//! 3. At token-emission time the caller routes each claim through
//!    [`destinations`](consent::destinations()) to decide whether it appears
//!    in the access token, the identity token, both, or neither.
//!
//! ## Modules
//!
//! - [`config`] - Engine configuration
//! - [`consent`] - Decision engine, identity assembly, and claim routing
//! - [`error`] - Error types
//! - [`storage`] - Collaborator traits (session, clients, grants, scopes)
//! - [`types`] - Domain types (request, client, subject, grant)

pub mod config;
pub mod consent;
pub mod error;
pub mod storage;
pub mod types;

pub use config::ConsentConfig;
pub use consent::{
    Claim, ClaimSet, ConsentEngine, Decision, DenialReason, Destination, IdentityAssembler,
    claims, destinations, scopes,
};
pub use error::{ConsentError, ErrorCategory};
pub use storage::{AuthorizationStore, ClientDirectory, ScopeResolver, SessionContext};
pub use types::{
    AuthorizationGrant, AuthorizationRequest, ClientApplication, ConsentType, GrantStatus,
    GrantType, Prompt, Subject,
};

/// Type alias for consent engine results.
pub type ConsentResult<T> = Result<T, ConsentError>;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use oidc_consent::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ConsentResult;
    pub use crate::config::ConsentConfig;
    pub use crate::consent::{
        Claim, ClaimSet, ConsentEngine, Decision, DenialReason, Destination, IdentityAssembler,
        claims, destinations, scopes,
    };
    pub use crate::error::{ConsentError, ErrorCategory};
    pub use crate::storage::{AuthorizationStore, ClientDirectory, ScopeResolver, SessionContext};
    pub use crate::types::{
        AuthorizationGrant, AuthorizationRequest, ClientApplication, ConsentType, GrantStatus,
        GrantType, Prompt, Subject,
    };
}
