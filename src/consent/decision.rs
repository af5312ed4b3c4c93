//! Consent decisions and the pure decision table.
//!
//! The branch-heavy dispatch over consent types and prompt combinations is
//! expressed here as a single pure function over
//! `(consent type, grant history, prompts)` so it can be unit-tested
//! without any I/O. The engine maps the table outcome onto a [`Decision`],
//! attaching the claim set or the echoed request parameters as needed.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::consent::identity::ClaimSet;
use crate::types::{ConsentType, Prompt};

// =============================================================================
// Decision
// =============================================================================

/// Terminal outcome of a consent evaluation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Decision {
    /// The request is denied with a machine-readable reason.
    /// No claim set is built on denial, so no claim data can leak.
    Denied(DenialReason),

    /// The request is approved; the claim set is ready for token issuance.
    Approved(ClaimSet),

    /// Interactive consent is required. Carries the original request's raw
    /// parameters verbatim so the consent page can resubmit them unchanged.
    AwaitingConsent(Vec<(String, String)>),
}

impl Decision {
    /// Returns `true` if the request was approved.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved(_))
    }
}

// =============================================================================
// Denial Reason
// =============================================================================

/// Machine-readable reason attached to a denied decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// No valid session exists, or the session is older than the request's
    /// `max_age` allows. The caller should re-challenge authentication
    /// rather than fail the OAuth flow.
    ReauthenticationRequired,

    /// Consent is required but cannot be obtained: either the client uses
    /// external consent and no grant was pre-provisioned, or the request
    /// forbade interaction with `prompt=none`.
    ConsentRequired,

    /// The resource owner explicitly rejected the request.
    UserDeclined,
}

impl DenialReason {
    /// Returns the OAuth 2.0 / OIDC error code for this denial.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ReauthenticationRequired => "login_required",
            Self::ConsentRequired => "consent_required",
            Self::UserDeclined => "access_denied",
        }
    }

    /// Returns the human-readable error description sent to the client
    /// application.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::ReauthenticationRequired => "The user must re-authenticate.",
            Self::ConsentRequired => "Interactive user consent is required.",
            Self::UserDeclined => "The authorization was denied by the user.",
        }
    }
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error_code())
    }
}

// =============================================================================
// Decision Table
// =============================================================================

/// Outcome of the pure consent decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableOutcome {
    /// Approve silently and mint a claim set.
    Approve,
    /// Deny with `consent_required`.
    Deny,
    /// Defer to the interactive consent page.
    RequireInteraction,
}

/// Applies the consent decision table.
///
/// `has_matching_grant` reflects whether a valid permanent grant covering
/// the requested scopes exists for the (subject, client) pair.
///
/// | consent type        | grant exists | prompts            | outcome            |
/// |---------------------|--------------|--------------------|--------------------|
/// | External            | no           | -                  | Deny               |
/// | External            | yes          | -                  | Approve            |
/// | Implicit            | any          | -                  | Approve            |
/// | Explicit            | yes          | without `consent`  | Approve            |
/// | Explicit/Systematic | no           | with `none`        | Deny               |
/// | Explicit/Systematic | otherwise    | -                  | RequireInteraction |
#[must_use]
pub fn decide(
    consent_type: ConsentType,
    has_matching_grant: bool,
    prompts: &BTreeSet<Prompt>,
) -> TableOutcome {
    match consent_type {
        // External consent is granted out-of-band; without a
        // pre-provisioned grant the request can never succeed.
        ConsentType::External if !has_matching_grant => TableOutcome::Deny,
        ConsentType::External | ConsentType::Implicit => TableOutcome::Approve,

        ConsentType::Explicit if has_matching_grant && !prompts.contains(&Prompt::Consent) => {
            TableOutcome::Approve
        }

        // prompt=none forbids interaction, and interaction is the only way
        // left to obtain consent.
        ConsentType::Explicit | ConsentType::Systematic
            if !has_matching_grant && prompts.contains(&Prompt::None) =>
        {
            TableOutcome::Deny
        }

        ConsentType::Explicit | ConsentType::Systematic => TableOutcome::RequireInteraction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompts(values: &[Prompt]) -> BTreeSet<Prompt> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_external_without_grant_denies() {
        assert_eq!(
            decide(ConsentType::External, false, &prompts(&[])),
            TableOutcome::Deny
        );
        assert_eq!(
            decide(ConsentType::External, false, &prompts(&[Prompt::Consent])),
            TableOutcome::Deny
        );
    }

    #[test]
    fn test_external_with_grant_approves() {
        assert_eq!(
            decide(ConsentType::External, true, &prompts(&[])),
            TableOutcome::Approve
        );
    }

    #[test]
    fn test_implicit_always_approves() {
        for has_grant in [false, true] {
            for p in [
                prompts(&[]),
                prompts(&[Prompt::None]),
                prompts(&[Prompt::Consent]),
            ] {
                assert_eq!(
                    decide(ConsentType::Implicit, has_grant, &p),
                    TableOutcome::Approve
                );
            }
        }
    }

    #[test]
    fn test_explicit_with_grant_approves_unless_consent_prompt() {
        assert_eq!(
            decide(ConsentType::Explicit, true, &prompts(&[])),
            TableOutcome::Approve
        );
        assert_eq!(
            decide(ConsentType::Explicit, true, &prompts(&[Prompt::Login])),
            TableOutcome::Approve
        );
        assert_eq!(
            decide(ConsentType::Explicit, true, &prompts(&[Prompt::Consent])),
            TableOutcome::RequireInteraction
        );
    }

    #[test]
    fn test_prompt_none_without_grant_denies() {
        assert_eq!(
            decide(ConsentType::Explicit, false, &prompts(&[Prompt::None])),
            TableOutcome::Deny
        );
        assert_eq!(
            decide(ConsentType::Systematic, false, &prompts(&[Prompt::None])),
            TableOutcome::Deny
        );
    }

    #[test]
    fn test_explicit_without_grant_requires_interaction() {
        assert_eq!(
            decide(ConsentType::Explicit, false, &prompts(&[])),
            TableOutcome::RequireInteraction
        );
        assert_eq!(
            decide(ConsentType::Explicit, false, &prompts(&[Prompt::Consent])),
            TableOutcome::RequireInteraction
        );
    }

    #[test]
    fn test_systematic_always_interactive_when_interaction_allowed() {
        assert_eq!(
            decide(ConsentType::Systematic, false, &prompts(&[])),
            TableOutcome::RequireInteraction
        );
        assert_eq!(
            decide(ConsentType::Systematic, true, &prompts(&[])),
            TableOutcome::RequireInteraction
        );
        // A grant never short-circuits systematic consent, even with
        // prompt=none.
        assert_eq!(
            decide(ConsentType::Systematic, true, &prompts(&[Prompt::None])),
            TableOutcome::RequireInteraction
        );
    }

    #[test]
    fn test_denial_reason_codes() {
        assert_eq!(
            DenialReason::ReauthenticationRequired.error_code(),
            "login_required"
        );
        assert_eq!(DenialReason::ConsentRequired.error_code(), "consent_required");
        assert_eq!(DenialReason::UserDeclined.error_code(), "access_denied");
    }

    #[test]
    fn test_denial_reason_display() {
        assert_eq!(
            DenialReason::ConsentRequired.to_string(),
            "consent_required"
        );
    }

    #[test]
    fn test_denial_reason_serde() {
        let json = serde_json::to_string(&DenialReason::UserDeclined).unwrap();
        assert_eq!(json, r#""user_declined""#);
    }

    #[test]
    fn test_decision_is_approved() {
        let denied = Decision::Denied(DenialReason::ConsentRequired);
        assert!(!denied.is_approved());

        let awaiting = Decision::AwaitingConsent(vec![]);
        assert!(!awaiting.is_approved());
    }
}
