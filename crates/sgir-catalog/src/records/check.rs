//! Third-party background check records.

use crate::cpf;
use crate::labels::RiskLevel;
use crate::resource::{contains_ci, Resource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sgir_types::Regional;

/// Outcome of a background verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckStatus {
    #[serde(rename = "Em Análise")]
    EmAnalise,
    #[serde(rename = "Aprovado")]
    Aprovado,
    #[serde(rename = "Comprometido")]
    Comprometido,
}

/// A background check on a third-party individual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundCheck {
    pub id: u32,
    /// Subject's full name.
    pub name: String,
    /// Subject's CPF as registered (display string; see
    /// [`has_valid_cpf`](Self::has_valid_cpf)).
    pub cpf: String,
    /// Employer or contracting company.
    pub company: String,
    pub status: CheckStatus,
    pub regional: Regional,
    /// Directory name of the registering analyst.
    pub registered_by: String,
    pub notes: String,
    pub registered_at: NaiveDate,
    pub risk_level: RiskLevel,
}

impl BackgroundCheck {
    /// Returns `true` if the registered CPF passes the checksum.
    ///
    /// Registration does not enforce this; records imported from the
    /// legacy system may carry invalid numbers.
    #[must_use]
    pub fn has_valid_cpf(&self) -> bool {
        cpf::is_valid(&self.cpf)
    }
}

impl Resource for BackgroundCheck {
    fn regional(&self) -> Regional {
        self.regional
    }

    /// Searches subject name and company.
    fn matches_text(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle) || contains_ci(&self.company, needle)
    }
}
