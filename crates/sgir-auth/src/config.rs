//! Session configuration.
//!
//! All fields implement [`Default`] with the compile-time fallback
//! values used by the pilot deployment, so `AuthConfig::default()`
//! is a fully working configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for session lifecycle and lockout behavior.
///
/// Durations are stored as integer milliseconds so the struct
/// round-trips cleanly through JSON/TOML; use the accessor methods for
/// [`Duration`] values.
///
/// # Example
///
/// ```
/// use sgir_auth::AuthConfig;
/// use std::time::Duration;
///
/// let config = AuthConfig::default();
/// assert_eq!(config.session_timeout(), Duration::from_secs(30 * 60));
/// assert_eq!(config.max_attempts, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Idle timeout before a session expires, in milliseconds.
    pub session_timeout_ms: u64,

    /// Consecutive failures that trigger a lockout.
    pub max_attempts: u32,

    /// Lockout cooldown window, in milliseconds.
    pub lockout_window_ms: u64,

    /// Minimum accepted credential length.
    ///
    /// This is a **placeholder, non-cryptographic** check carried over
    /// from the demo system: no secret is ever verified. Real
    /// credential verification is explicitly out of scope.
    pub min_credential_len: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_timeout_ms: 30 * 60 * 1000,
            max_attempts: 3,
            lockout_window_ms: 5 * 60 * 1000,
            min_credential_len: 8,
        }
    }
}

impl AuthConfig {
    /// Creates a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The idle timeout as a [`Duration`].
    #[must_use]
    pub fn session_timeout(&self) -> Duration {
        Duration::from_millis(self.session_timeout_ms)
    }

    /// The lockout cooldown as a [`Duration`].
    #[must_use]
    pub fn lockout_window(&self) -> Duration {
        Duration::from_millis(self.lockout_window_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployment_values() {
        let config = AuthConfig::default();
        assert_eq!(config.session_timeout(), Duration::from_secs(1800));
        assert_eq!(config.lockout_window(), Duration::from_secs(300));
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.min_credential_len, 8);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: AuthConfig =
            serde_json::from_str(r#"{ "max_attempts": 5 }"#).expect("partial config");
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.session_timeout_ms, 30 * 60 * 1000);
    }
}
