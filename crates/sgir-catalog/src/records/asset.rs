//! Strategic asset reference data.

use serde::{Deserialize, Serialize};

/// Category of a strategic asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Industrial,
    Florestal,
    Portuario,
}

/// A fixed company site used as a map anchor for proximity queries.
///
/// Assets are reference data, not intelligence: they carry no regional
/// tag and are not visibility-filtered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Stable slug, e.g. `porto-santos`.
    pub id: String,
    pub name: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub description: String,
    /// Site security grading label.
    pub security_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_seed_shape() {
        let json = r#"{
            "id": "porto-santos",
            "name": "Terminal Porto de Santos",
            "lat": -23.98,
            "lon": -46.31,
            "type": "portuario",
            "description": "Terminal portuário especializado",
            "securityLevel": "Alto"
        }"#;

        let asset: Asset = serde_json::from_str(json).expect("seed shape");
        assert_eq!(asset.kind, AssetKind::Portuario);
        assert_eq!(asset.id, "porto-santos");
    }
}
