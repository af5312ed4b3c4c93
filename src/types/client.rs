//! Client application domain types.
//!
//! Client registrations are owned by the external client directory; this
//! crate only reads them.

use serde::{Deserialize, Serialize};

// =============================================================================
// Consent Type
// =============================================================================

/// Consent policy attached to a client registration.
///
/// Determines whether and how the resource owner is asked for consent
/// before an authorization is granted to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentType {
    /// The user must explicitly consent unless a sufficient permanent
    /// grant already exists.
    Explicit,
    /// Consent is implied; requests are always approved without
    /// interaction.
    Implicit,
    /// Consent is granted out-of-band (e.g. by a system administrator);
    /// requests without a pre-provisioned grant are denied.
    External,
    /// The user is asked for consent on every authorization, regardless of
    /// existing grants.
    Systematic,
}

impl ConsentType {
    /// Returns the canonical string representation of the consent type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Implicit => "implicit",
            Self::External => "external",
            Self::Systematic => "systematic",
        }
    }
}

impl std::fmt::Display for ConsentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Client Application
// =============================================================================

/// A registered client application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientApplication {
    /// Client identifier used in authorization requests and as the key for
    /// authorization grants.
    pub id: String,

    /// Human-readable display name shown on the consent page.
    pub display_name: String,

    /// Consent policy for this client.
    pub consent_type: ConsentType,
}

impl ClientApplication {
    /// Creates a new client application.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        consent_type: ConsentType,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            consent_type,
        }
    }
}
