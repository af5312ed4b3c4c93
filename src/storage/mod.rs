//! Collaborator traits for consent evaluation.
//!
//! The consent engine consumes its surroundings through four narrow
//! contracts:
//!
//! - [`SessionContext`] - the authenticated session (subject and issuance time)
//! - [`ClientDirectory`] - client application registrations
//! - [`AuthorizationStore`] - persisted authorization grants
//! - [`ScopeResolver`] - scope-to-resource mapping
//!
//! # Implementations
//!
//! Implementations live in the surrounding protocol server (cookie
//! authentication, database-backed registries). Tests use in-memory mocks.

pub mod authorization;
pub mod client;
pub mod scope;
pub mod session;

pub use authorization::AuthorizationStore;
pub use client::ClientDirectory;
pub use scope::ScopeResolver;
pub use session::SessionContext;
