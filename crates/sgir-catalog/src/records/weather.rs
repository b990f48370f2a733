//! Per-region weather and fire-risk snapshots.

use crate::labels::FireRisk;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A weather snapshot for one region.
///
/// The `Global` entry is an aggregate placeholder: its measurements
/// are absent and its risk is [`FireRisk::NotAvailable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    /// Temperature in °C, when measured.
    pub temp: Option<i32>,
    /// Relative humidity in %, when measured.
    pub humidity: Option<i32>,
    /// Wind speed in km/h, when measured.
    pub wind: Option<i32>,
    /// Fire-risk grading.
    pub risk: FireRisk,
    pub forecast: String,
    pub last_update: DateTime<Utc>,
}

impl WeatherReport {
    /// Returns `true` when actual measurements are present.
    #[must_use]
    pub fn has_measurements(&self) -> bool {
        self.temp.is_some() && self.humidity.is_some() && self.wind.is_some()
    }
}
