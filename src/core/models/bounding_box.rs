use crate::global_constants;

/// Rectangular search region expanded from a point by fixed half-extents.
/// Each bound is clamped independently, so a point near an edge of the legal
/// range produces an asymmetric box rather than a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub lon_min: f64,
    pub lat_min: f64,
    pub lon_max: f64,
    pub lat_max: f64,
}

impl BoundingBox {
    pub fn around(latitude: f64, longitude: f64, half_width: f64, half_height: f64) -> Self {
        let (lat_floor, lat_ceiling) = global_constants::SEARCH_LAT_RANGE;
        let (lon_floor, lon_ceiling) = global_constants::SEARCH_LON_RANGE;

        Self {
            lon_min: (longitude - half_width).max(lon_floor),
            lat_min: (latitude - half_height).max(lat_floor),
            lon_max: (longitude + half_width).min(lon_ceiling),
            lat_max: (latitude + half_height).min(lat_ceiling),
        }
    }

    /// The wire form the API expects: `lonMin,latMin,lonMax,latMax`.
    pub fn to_query_value(&self) -> String {
        format!(
            "{},{},{},{}",
            self.lon_min, self.lat_min, self.lon_max, self.lat_max
        )
    }
}
