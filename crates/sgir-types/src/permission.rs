//! Permission tags.

use serde::{Deserialize, Serialize};

/// A permission tag attached to an identity.
///
/// Tags come in two tiers:
///
/// | Tier | Tags | Effect |
/// |------|------|--------|
/// | Domain | `standard`, `industrial`, `florestal`, `portuario` | Gate access to records that require them |
/// | Elevated | `supervisor`, `manager`, `director` | Bypass regional scoping entirely |
///
/// Elevated tags short-circuit the visibility policy: an identity
/// holding any of them sees every resource regardless of regional
/// match. Domain tags only matter when a query names them as required.
///
/// # Example
///
/// ```
/// use sgir_types::Permission;
///
/// assert!(Permission::Supervisor.is_elevated());
/// assert!(!Permission::Florestal.is_elevated());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// Baseline tag held by every field analyst.
    Standard,
    /// Industrial-site analysis.
    Industrial,
    /// Forestry analysis.
    Florestal,
    /// Port-terminal analysis.
    Portuario,
    /// Supervisory oversight — elevated.
    Supervisor,
    /// General management — elevated.
    Manager,
    /// Directorate — elevated.
    Director,
}

impl Permission {
    /// Returns `true` for tags that bypass regional scoping.
    #[must_use]
    pub fn is_elevated(&self) -> bool {
        matches!(self, Self::Supervisor | Self::Manager | Self::Director)
    }

    /// Returns the lowercase wire name of the tag.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Industrial => "industrial",
            Self::Florestal => "florestal",
            Self::Portuario => "portuario",
            Self::Supervisor => "supervisor",
            Self::Manager => "manager",
            Self::Director => "director",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
