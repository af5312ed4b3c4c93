//! Consent engine configuration.

use time::Duration;

/// Configuration for the consent decision engine.
#[derive(Debug, Clone)]
pub struct ConsentConfig {
    /// Clock-skew allowance applied when comparing the session age against
    /// the request's `max_age` parameter.
    /// Default: zero (strict comparison, matching the OIDC core semantics).
    pub max_age_leeway: Duration,
}

impl Default for ConsentConfig {
    fn default() -> Self {
        Self {
            max_age_leeway: Duration::ZERO,
        }
    }
}

impl ConsentConfig {
    /// Creates a new configuration with a custom `max_age` clock-skew
    /// allowance.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config = ConsentConfig::default().with_max_age_leeway(Duration::seconds(5));
    /// ```
    #[must_use]
    pub fn with_max_age_leeway(mut self, leeway: Duration) -> Self {
        self.max_age_leeway = leeway;
        self
    }
}
