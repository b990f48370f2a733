//! Regional scope tags.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A regional visibility scope.
///
/// Both identities and resources carry exactly one `Regional` tag.
/// A resource is visible to an identity when the tags match, with one
/// exception: [`Regional::Global`] is a wildcard that matches every
/// region (see `sgir-auth`'s `RegionalPolicy` for the full rule order).
///
/// # Wire Format
///
/// Serializes to the operational region codes used by the seed data:
/// `"SP"`, `"MS"`, `"BA"`, `"SP-Porto"`, `"Global"`.
///
/// # Example
///
/// ```
/// use sgir_types::Regional;
///
/// assert!(Regional::Global.is_global());
/// assert!(!Regional::Sp.is_global());
/// assert_eq!(Regional::SpPorto.to_string(), "SP-Porto");
/// assert_eq!("MS".parse::<Regional>().unwrap(), Regional::Ms);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regional {
    /// São Paulo — industrial and forestry operations.
    #[serde(rename = "SP")]
    Sp,

    /// Mato Grosso do Sul — forestry operations.
    #[serde(rename = "MS")]
    Ms,

    /// Bahia — industrial operations.
    #[serde(rename = "BA")]
    Ba,

    /// Santos port terminal — treated as its own scope, distinct from SP.
    #[serde(rename = "SP-Porto")]
    SpPorto,

    /// Wildcard scope matching every region.
    ///
    /// Identities scoped `Global` see everything; resources tagged
    /// `Global` are visible only to identities that themselves pass
    /// the policy for `Global` (wildcard or elevated).
    #[serde(rename = "Global")]
    Global,
}

impl Regional {
    /// Returns `true` if this is the wildcard [`Regional::Global`] scope.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global)
    }

    /// Returns the wire/display code for this region.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Sp => "SP",
            Self::Ms => "MS",
            Self::Ba => "BA",
            Self::SpPorto => "SP-Porto",
            Self::Global => "Global",
        }
    }

    /// All concrete (non-wildcard) regions.
    #[must_use]
    pub fn concrete() -> &'static [Regional] {
        &[Self::Sp, Self::Ms, Self::Ba, Self::SpPorto]
    }
}

impl std::fmt::Display for Regional {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unknown region code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRegionalError(pub String);

impl std::fmt::Display for ParseRegionalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown regional code: {}", self.0)
    }
}

impl std::error::Error for ParseRegionalError {}

impl FromStr for Regional {
    type Err = ParseRegionalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SP" => Ok(Self::Sp),
            "MS" => Ok(Self::Ms),
            "BA" => Ok(Self::Ba),
            "SP-Porto" => Ok(Self::SpPorto),
            "Global" => Ok(Self::Global),
            other => Err(ParseRegionalError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_is_wildcard() {
        assert!(Regional::Global.is_global());
        for region in Regional::concrete() {
            assert!(!region.is_global());
        }
    }

    #[test]
    fn round_trip_codes() {
        for code in ["SP", "MS", "BA", "SP-Porto", "Global"] {
            let region: Regional = code.parse().expect("known code");
            assert_eq!(region.to_string(), code);
        }
    }

    #[test]
    fn unknown_code_fails() {
        let err = "RJ".parse::<Regional>().unwrap_err();
        assert!(err.to_string().contains("RJ"));
    }

    #[test]
    fn serde_uses_wire_codes() {
        let json = serde_json::to_string(&Regional::SpPorto).expect("serialize");
        assert_eq!(json, "\"SP-Porto\"");

        let back: Regional = serde_json::from_str("\"MS\"").expect("deserialize");
        assert_eq!(back, Regional::Ms);
    }
}
