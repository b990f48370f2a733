//! Great-circle distance between map coordinates.

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two lat/lon points given
/// in decimal degrees.
///
/// # Example
///
/// ```
/// // Bracell SP plant to the Santos terminal, roughly 280 km.
/// let d = sgir_catalog::geo::distance_km(-22.61, -48.78, -23.98, -46.31);
/// assert!((250.0..320.0).contains(&d));
/// ```
#[must_use]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
