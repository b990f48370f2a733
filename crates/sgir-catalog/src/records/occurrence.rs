//! Geolocated security occurrences.

use crate::labels::Severity;
use crate::resource::{contains_ci, Resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sgir_types::Regional;

/// Category of a security occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccurrenceKind {
    Furto,
    IncendioCriminoso,
    Invasao,
    Acidente,
    Suspeita,
    Ambiental,
}

/// Handling state of an occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OccurrenceStatus {
    #[serde(rename = "Investigando")]
    Investigando,
    #[serde(rename = "Em Andamento")]
    EmAndamento,
    #[serde(rename = "Resolvido")]
    Resolvido,
}

/// A geolocated incident reported in the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: OccurrenceKind,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    pub regional: Regional,
    pub description: String,
    pub reported_at: DateTime<Utc>,
    pub severity: Severity,
    pub status: OccurrenceStatus,
}

impl Resource for Occurrence {
    fn regional(&self) -> Regional {
        self.regional
    }

    /// Searches the description.
    fn matches_text(&self, needle: &str) -> bool {
        contains_ci(&self.description, needle)
    }
}
