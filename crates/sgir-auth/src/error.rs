//! Authentication error types.

use std::time::Duration;
use thiserror::Error;

/// Errors returned by [`Session::authenticate`](crate::Session::authenticate).
///
/// Every variant is reported synchronously to the caller; none is
/// fatal to the process. Lack of *visibility* is never an error — the
/// access policy returns `false` and queries return filtered results
/// (see [`AccessPolicy`](crate::AccessPolicy)).
///
/// # Lockout Accounting
///
/// `IdentityNotFound` and `InvalidCredential` each count toward the
/// lockout threshold. `LockedOut` does **not** — attempts made during
/// the cooldown window are rejected before the failure counter (or the
/// directory) is consulted.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The name is not present in the directory.
    #[error("identity not found: {0}")]
    IdentityNotFound(String),

    /// The placeholder credential check failed.
    ///
    /// This is **not** real credential verification — see
    /// [`AuthConfig::min_credential_len`](crate::AuthConfig::min_credential_len).
    #[error("invalid credential")]
    InvalidCredential,

    /// Too many consecutive failures; authentication is suspended.
    #[error("locked out: retry in {}s", remaining.as_secs())]
    LockedOut {
        /// Time left until the cooldown window elapses.
        remaining: Duration,
    },
}

impl AuthError {
    /// Creates an [`AuthError::IdentityNotFound`].
    pub fn identity_not_found(name: impl Into<String>) -> Self {
        Self::IdentityNotFound(name.into())
    }

    /// Returns `true` if this failure counts toward the lockout threshold.
    #[must_use]
    pub fn counts_toward_lockout(&self) -> bool {
        matches!(self, Self::IdentityNotFound(_) | Self::InvalidCredential)
    }
}
