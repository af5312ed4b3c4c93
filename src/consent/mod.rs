//! Consent decision engine, identity assembly, and claim routing.
//!
//! This module is the security-policy core of the crate:
//!
//! - [`decision`] - the pure decision table over consent type, grant
//!   history, and prompts, plus the [`Decision`] outcome type
//! - [`engine`] - the [`ConsentEngine`] orchestrating session checks,
//!   lookups, and the decision table over a single request
//! - [`identity`] - the [`IdentityAssembler`] building token-ready claim
//!   sets and reusing or creating permanent grants
//! - [`destinations`](mod@destinations) - the per-claim token-visibility
//!   router
//! - [`claims`] / [`scopes`] - canonical claim-type and scope constants

pub mod claims;
pub mod decision;
pub mod destinations;
pub mod engine;
pub mod identity;

pub use claims::scopes;
pub use decision::{Decision, DenialReason};
pub use destinations::{Destination, destinations};
pub use engine::ConsentEngine;
pub use identity::{Claim, ClaimSet, IdentityAssembler};
