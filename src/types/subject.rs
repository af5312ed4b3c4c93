//! Authenticated subject (resource owner) profile.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Profile of the authenticated resource owner.
///
/// Owned by the external user store; this crate only reads it to build
/// claim sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Opaque subject identifier.
    pub id: String,

    /// Display name, embedded as the `name` and `preferred_username` claims.
    pub display_name: String,

    /// Email address.
    pub email: String,

    /// Roles held by the subject. One `role` claim is emitted per entry.
    #[serde(default)]
    pub roles: BTreeSet<String>,
}

impl Subject {
    /// Creates a new subject profile.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            email: email.into(),
            roles: BTreeSet::new(),
        }
    }

    /// Sets the subject's roles.
    #[must_use]
    pub fn with_roles(mut self, roles: BTreeSet<String>) -> Self {
        self.roles = roles;
        self
    }
}
