//! Canonical claim-type and scope constants.
//!
//! Claim types follow the OpenID Connect standard claim names. The
//! `security_stamp` claim is a server-internal secret carried on some
//! identities; the destination router guarantees it never reaches an
//! issued token.

/// Subject identifier claim (`sub`).
pub const SUBJECT: &str = "sub";

/// Display name claim (`name`).
pub const NAME: &str = "name";

/// Preferred username claim (`preferred_username`).
pub const PREFERRED_USERNAME: &str = "preferred_username";

/// Email address claim (`email`).
pub const EMAIL: &str = "email";

/// Role claim (`role`), one entry per role held by the subject.
pub const ROLE: &str = "role";

/// Server-internal security stamp. Secret; never emitted in any token.
pub const SECURITY_STAMP: &str = "security_stamp";

/// Standard scope values gating claim visibility in identity tokens.
pub mod scopes {
    /// The `openid` scope.
    pub const OPENID: &str = "openid";

    /// The `profile` scope, unlocking `name` and `preferred_username` in
    /// identity tokens.
    pub const PROFILE: &str = "profile";

    /// The `email` scope, unlocking `email` in identity tokens.
    pub const EMAIL: &str = "email";

    /// The `roles` scope, unlocking `role` claims in identity tokens.
    pub const ROLES: &str = "roles";
}
