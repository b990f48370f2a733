//! Shared grading labels.
//!
//! Wire values are the Portuguese labels used by the seed data and the
//! operator UI; the enum names are their ASCII equivalents.

use serde::{Deserialize, Serialize};

/// Priority / relevance grading (low to critical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "Baixa")]
    Baixa,
    #[serde(rename = "Média")]
    Media,
    #[serde(rename = "Alta")]
    Alta,
    #[serde(rename = "Crítica")]
    Critica,
}

/// Risk grading for background checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Baixo")]
    Baixo,
    #[serde(rename = "Médio")]
    Medio,
    #[serde(rename = "Alto")]
    Alto,
}

/// Severity grading for map occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "Baixa")]
    Baixa,
    #[serde(rename = "Média")]
    Media,
    #[serde(rename = "Alta")]
    Alta,
}

/// Business impact of a news item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    #[serde(rename = "Positivo")]
    Positivo,
    #[serde(rename = "Negativo")]
    Negativo,
}

/// Fire-risk grading in weather reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FireRisk {
    #[serde(rename = "N/A")]
    NotAvailable,
    #[serde(rename = "Baixo")]
    Baixo,
    #[serde(rename = "Moderado")]
    Moderado,
    #[serde(rename = "Elevado")]
    Elevado,
    #[serde(rename = "Crítico")]
    Critico,
}

impl FireRisk {
    /// The operator-facing Portuguese label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotAvailable => "N/A",
            Self::Baixo => "Baixo",
            Self::Moderado => "Moderado",
            Self::Elevado => "Elevado",
            Self::Critico => "Crítico",
        }
    }
}

impl std::fmt::Display for FireRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
