//! Identifier types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for one authenticated session.
///
/// A fresh `SessionId` is minted on every successful authentication so
/// audit events from distinct logins are distinguishable even for the
/// same identity.
///
/// # Example
///
/// ```
/// use sgir_types::SessionId;
///
/// let a = SessionId::new();
/// let b = SessionId::new();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Mints a random (UUID v4) session identifier.
    #[must_use]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = SessionId::new();
        let b = SessionId::new();
        assert_ne!(a, b);
        assert_ne!(a.uuid(), b.uuid());
    }

    #[test]
    fn display_is_uuid() {
        let id = SessionId::new();
        assert_eq!(id.to_string(), id.uuid().to_string());
    }

    #[test]
    fn serde_round_trip() {
        let id = SessionId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        let back: SessionId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, back);
    }
}
