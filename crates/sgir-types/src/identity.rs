//! Identity (directory entry) types.
//!
//! An [`Identity`] is pure identity: who someone is, which region they
//! work in, which permission tags they hold. Whether they may *see* a
//! given resource is decided by `sgir-auth`'s access policy, never
//! here.

use crate::{Permission, Regional};
use serde::{Deserialize, Serialize};

/// A directory entry describing one user of the system.
///
/// Identities are immutable once built — the directory is read-only
/// configuration loaded at process start, and nothing in the access
/// layer mutates it.
///
/// # Example
///
/// ```
/// use sgir_types::{Identity, Permission, Regional};
///
/// let analyst = Identity::new(
///     "Fábio",
///     "Analista Florestal",
///     Regional::Sp,
///     vec![Permission::Standard, Permission::Florestal],
/// );
///
/// assert!(analyst.has_permission(Permission::Florestal));
/// assert!(!analyst.is_elevated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique display name; the directory lookup key.
    pub name: String,

    /// Human-readable role label (no permission semantics).
    pub role: String,

    /// The identity's regional scope.
    pub regional: Regional,

    /// Permission tags held by this identity.
    pub permissions: Vec<Permission>,

    /// Contact address, for display only.
    #[serde(default)]
    pub email: Option<String>,

    /// Avatar initials, for display only.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Identity {
    /// Creates an identity with no display metadata.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        regional: Regional,
        permissions: Vec<Permission>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            regional,
            permissions,
            email: None,
            avatar: None,
        }
    }

    /// Returns `true` if this identity holds the given tag.
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Returns `true` if this identity holds at least one of the given tags.
    ///
    /// An empty slice yields `false` — "at least one of nothing" is
    /// unsatisfiable. Callers that mean "no requirement" should skip
    /// the check instead.
    #[must_use]
    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        permissions.iter().any(|p| self.has_permission(*p))
    }

    /// Returns `true` if this identity holds any elevated tag
    /// (`supervisor`, `manager`, `director`).
    #[must_use]
    pub fn is_elevated(&self) -> bool {
        self.permissions.iter().any(Permission::is_elevated)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}@{})", self.name, self.role, self.regional)
    }
}
