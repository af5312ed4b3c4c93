//! Domain types for consent evaluation.
//!
//! This module contains the shared type definitions consumed by the consent
//! engine and its collaborator traits.
//!
//! ## Domain Types
//!
//! - [`AuthorizationRequest`] - Incoming authorization request parameters
//! - [`ClientApplication`] - Registered client application
//! - [`Subject`] - Authenticated resource owner
//! - [`AuthorizationGrant`] - Persisted authorization grant

pub mod client;
pub mod grant;
pub mod request;
pub mod subject;

pub use client::{ClientApplication, ConsentType};
pub use grant::{AuthorizationGrant, GrantStatus, GrantType};
pub use request::{AuthorizationRequest, Prompt};
pub use subject::Subject;
