//! Spatial math: great-circle distance, flat-earth projection and field
//! boundary helpers.

use crate::models::{FlightDirection, GeoPoint};
use crate::rules::{M2_PER_HECTARE, METERS_PER_DEGREE_LAT};

/// Mean Earth radius used by [`haversine_distance`].
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Smallest cosine factor applied to longitude scaling.
const MIN_LNG_SCALE: f64 = 0.01;

/// Calculate distance between two points in meters using Haversine formula.
///
/// # Arguments
/// * `lat1`, `lng1` - First point coordinates in decimal degrees
/// * `lat2`, `lng2` - Second point coordinates in decimal degrees
///
/// # Returns
/// Distance in meters
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lng2 - lng1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Meters per degree of longitude at a given latitude, flat-earth model.
pub fn meters_per_deg_lng(lat_deg: f64) -> f64 {
    METERS_PER_DEGREE_LAT * lat_deg.to_radians().cos().max(MIN_LNG_SCALE)
}

/// Meters-to-degrees conversion anchored at one reference point.
///
/// Only valid for field-sized extents around the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatEarthProjector {
    anchor: GeoPoint,
    meters_per_deg_lng: f64,
}

impl FlatEarthProjector {
    pub fn new(anchor: GeoPoint) -> Self {
        Self {
            anchor,
            meters_per_deg_lng: meters_per_deg_lng(anchor.lat),
        }
    }

    /// Convert a north/south offset in meters to degrees latitude.
    pub fn meters_to_lat(&self, meters: f64) -> f64 {
        meters / METERS_PER_DEGREE_LAT
    }

    /// Convert an east/west offset in meters to degrees longitude.
    pub fn meters_to_lng(&self, meters: f64) -> f64 {
        meters / self.meters_per_deg_lng
    }

    /// Endpoints of a pass of `length_m` flown along `direction`, shifted
    /// `lateral_offset_m` across the flight axis.
    ///
    /// North-south passes start north of the anchor line and end south;
    /// east-west passes start west and end east. Both endpoints sit
    /// half the length either side of the anchor.
    pub fn pass_endpoints(
        &self,
        direction: FlightDirection,
        lateral_offset_m: f64,
        length_m: f64,
    ) -> (GeoPoint, GeoPoint) {
        let half_m = length_m / 2.0;
        let (offset_lat, offset_lng, half_lat, half_lng) = match direction {
            FlightDirection::NorthSouth => (
                0.0,
                self.meters_to_lng(lateral_offset_m),
                self.meters_to_lat(half_m),
                0.0,
            ),
            FlightDirection::EastWest => (
                self.meters_to_lat(lateral_offset_m),
                0.0,
                0.0,
                self.meters_to_lng(half_m),
            ),
        };

        let start = GeoPoint::new(
            self.anchor.lat + offset_lat + half_lat,
            self.anchor.lng + offset_lng - half_lng,
        );
        let end = GeoPoint::new(
            self.anchor.lat + offset_lat - half_lat,
            self.anchor.lng + offset_lng + half_lng,
        );
        (start, end)
    }
}

/// Vertex average of a boundary polygon.
pub fn boundary_centroid(points: &[GeoPoint]) -> Option<GeoPoint> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let lat = points.iter().map(|p| p.lat).sum::<f64>() / n;
    let lng = points.iter().map(|p| p.lng).sum::<f64>() / n;
    Some(GeoPoint::new(lat, lng))
}

/// Area and bounding extents of a field outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryMetrics {
    pub area_ha: f64,
    pub extent_east_west_m: f64,
    pub extent_north_south_m: f64,
}

/// Measure a boundary polygon on a local plane anchored at its first vertex.
///
/// Longitude is scaled at the average latitude. Returns `None` for fewer
/// than three vertices.
pub fn boundary_metrics(points: &[GeoPoint]) -> Option<BoundaryMetrics> {
    if points.len() < 3 {
        return None;
    }
    let first = points[0];
    let centroid = boundary_centroid(points)?;
    let m_per_deg_lng = meters_per_deg_lng(centroid.lat);

    let coords: Vec<(f64, f64)> = points
        .iter()
        .map(|p| {
            (
                (p.lng - first.lng) * m_per_deg_lng,
                (p.lat - first.lat) * METERS_PER_DEGREE_LAT,
            )
        })
        .collect();

    // Shoelace
    let mut twice_area = 0.0;
    for (i, &(x0, y0)) in coords.iter().enumerate() {
        let (x1, y1) = coords[(i + 1) % coords.len()];
        twice_area += x0 * y1 - x1 * y0;
    }

    let (min_x, max_x) = min_max(coords.iter().map(|c| c.0));
    let (min_y, max_y) = min_max(coords.iter().map(|c| c.1));

    Some(BoundaryMetrics {
        area_ha: twice_area.abs() / 2.0 / M2_PER_HECTARE,
        extent_east_west_m: max_x - min_x,
        extent_north_south_m: max_y - min_y,
    })
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Serialize a boundary as a JSON array of `{"lat", "lng"}` objects.
pub fn encode_boundary(points: &[GeoPoint]) -> Result<String, serde_json::Error> {
    serde_json::to_string(points)
}

/// Parse a boundary produced by [`encode_boundary`].
///
/// Lenient: malformed JSON yields an empty outline and entries without
/// numeric `lat`/`lng` are skipped.
pub fn parse_boundary_json(json: &str) -> Vec<GeoPoint> {
    let Ok(serde_json::Value::Array(entries)) = serde_json::from_str::<serde_json::Value>(json)
    else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| {
            let lat = entry.get("lat")?.as_f64()?;
            let lng = entry.get("lng")?.as_f64()?;
            Some(GeoPoint::new(lat, lng))
        })
        .collect()
}
