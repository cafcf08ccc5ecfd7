//! Core data models for the spray planner.

use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another point in meters.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        crate::spatial::haversine_distance(self.lat, self.lng, other.lat, other.lng)
    }
}

/// Optional equipment parameters. Missing or non-positive values fall back
/// to the defaults in [`crate::rules::PlanningRules`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentParams {
    /// Spray swath width / distance between passes (m)
    #[serde(default)]
    pub pass_spacing_m: Option<f64>,
    /// Cruise speed while spraying (km/h)
    #[serde(default)]
    pub cruise_speed_kmh: Option<f64>,
    /// Battery autonomy per charge (min)
    #[serde(default)]
    pub battery_autonomy_min: Option<f64>,
    /// Spray tank capacity (L)
    #[serde(default)]
    pub tank_capacity_l: Option<f64>,
    /// Ground time spent refilling/swapping batteries (min)
    #[serde(default)]
    pub refill_time_min: Option<f64>,
    /// Time lost on each turn between passes (s)
    #[serde(default)]
    pub turn_time_s: Option<f64>,
}

/// Everything the planner needs to lay out a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningInput {
    pub job_id: i64,
    #[serde(default)]
    pub lot_id: Option<i64>,
    pub hectares: f64,
    pub extent_east_west_m: f64,
    pub extent_north_south_m: f64,
    pub application_rate_l_ha: f64,
    pub refill_point: GeoPoint,
    /// Direction the wind blows from, degrees clockwise from north
    #[serde(default)]
    pub wind_bearing_deg: f64,
    #[serde(default)]
    pub wind_speed: f64,
    #[serde(default)]
    pub equipment: EquipmentParams,
    /// Explicit anchor for segment geometry
    #[serde(default)]
    pub centroid: Option<GeoPoint>,
    #[serde(default = "default_drone_count")]
    pub drone_count: u32,
    /// Field outline, only used with three or more vertices
    #[serde(default)]
    pub boundary: Option<Vec<GeoPoint>>,
}

fn default_drone_count() -> u32 {
    1
}

impl PlanningInput {
    /// Boundary vertices when the outline is a usable polygon.
    pub fn usable_boundary(&self) -> Option<&[GeoPoint]> {
        self.boundary
            .as_deref()
            .filter(|points| points.len() >= 3)
    }
}

/// Axis along which spray passes are flown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightDirection {
    #[serde(rename = "NORTE_SUR")]
    NorthSouth,
    #[serde(rename = "ESTE_OESTE")]
    EastWest,
}

impl FlightDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightDirection::NorthSouth => "NORTE_SUR",
            FlightDirection::EastWest => "ESTE_OESTE",
        }
    }
}

impl std::fmt::Display for FlightDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the chosen pass axis relates to the wind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindStrategy {
    #[serde(rename = "FAVOR_VIENTO")]
    WithWind,
    #[serde(rename = "PERPENDICULAR_VIENTO")]
    CrossWind,
}

impl WindStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindStrategy::WithWind => "FAVOR_VIENTO",
            WindStrategy::CrossWind => "PERPENDICULAR_VIENTO",
        }
    }
}

impl std::fmt::Display for WindStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which limit forced the drone back to the refill point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RefillCause {
    /// Tank ran dry
    #[serde(alias = "PRODUCTO")]
    Tank,
    /// Battery autonomy exhausted
    #[serde(alias = "BATERIA")]
    Battery,
    /// Both at the same pass
    #[serde(alias = "AMBOS")]
    Both,
}

impl RefillCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefillCause::Tank => "TANK",
            RefillCause::Battery => "BATTERY",
            RefillCause::Both => "BOTH",
        }
    }

    pub(crate) fn from_limits(battery_limited: bool, tank_limited: bool) -> Option<Self> {
        match (battery_limited, tank_limited) {
            (true, true) => Some(RefillCause::Both),
            (true, false) => Some(RefillCause::Battery),
            (false, true) => Some(RefillCause::Tank),
            (false, false) => None,
        }
    }
}

/// One sortie: the passes flown between two visits to the refill point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSegment {
    /// Assigned by storage, always 0 from the planner
    pub id: i64,
    /// Assigned by storage, always 0 from the planner
    pub work_plan_id: i64,
    /// 1-based flight order
    pub sequence: u32,
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub distance_m: f64,
    /// Rounded to whole minutes, never below 1
    pub flight_time_min: u32,
    pub area_ha: f64,
    pub product_l: f64,
    pub requires_refill: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refill_cause: Option<RefillCause>,
    pub note: String,
}

/// Plan header: parameters actually used plus aggregate totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkPlan {
    /// Assigned by storage, always 0 from the planner
    pub id: i64,
    pub job_id: i64,
    pub lot_id: Option<i64>,
    pub battery_autonomy_min: f64,
    pub tank_capacity_l: f64,
    pub pass_spacing_m: f64,
    pub cruise_speed_kmh: f64,
    pub refill_time_min: f64,
    pub turn_time_s: f64,
    pub application_rate_l_ha: f64,
    pub extent_east_west_m: f64,
    pub extent_north_south_m: f64,
    pub total_hectares: f64,
    pub refill_point: GeoPoint,
    pub wind_bearing_deg: f64,
    pub wind_speed: f64,
    pub total_flights: u32,
    /// Flight plus refill time split across the fleet (min)
    pub total_time_min: u32,
    pub total_distance_m: f64,
    pub refill_count: u32,
    pub direction: FlightDirection,
    pub wind_strategy: WindStrategy,
    pub drone_count: u32,
    #[serde(default)]
    pub boundary_json: Option<String>,
}

/// Output of a planning call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningResult {
    pub work_plan: WorkPlan,
    pub segments: Vec<FlightSegment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_serialize_with_wire_names() {
        assert_eq!(
            serde_json::to_string(&FlightDirection::NorthSouth).unwrap(),
            "\"NORTE_SUR\""
        );
        assert_eq!(
            serde_json::to_string(&WindStrategy::CrossWind).unwrap(),
            "\"PERPENDICULAR_VIENTO\""
        );
        assert_eq!(serde_json::to_string(&RefillCause::Tank).unwrap(), "\"TANK\"");
    }

    #[test]
    fn refill_cause_accepts_legacy_tags() {
        let cause: RefillCause = serde_json::from_str("\"PRODUCTO\"").unwrap();
        assert_eq!(cause, RefillCause::Tank);
        let cause: RefillCause = serde_json::from_str("\"AMBOS\"").unwrap();
        assert_eq!(cause, RefillCause::Both);
    }

    #[test]
    fn input_defaults_optional_fields() {
        let input: PlanningInput = serde_json::from_value(serde_json::json!({
            "job_id": 7,
            "hectares": 2.0,
            "extent_east_west_m": 200.0,
            "extent_north_south_m": 100.0,
            "application_rate_l_ha": 50.0,
            "refill_point": { "lat": -34.6, "lng": -58.4 }
        }))
        .unwrap();

        assert_eq!(input.drone_count, 1);
        assert_eq!(input.equipment, EquipmentParams::default());
        assert!(input.usable_boundary().is_none());
    }

    #[test]
    fn boundary_needs_three_points() {
        let mut input: PlanningInput = serde_json::from_value(serde_json::json!({
            "job_id": 1,
            "hectares": 1.0,
            "extent_east_west_m": 100.0,
            "extent_north_south_m": 100.0,
            "application_rate_l_ha": 10.0,
            "refill_point": { "lat": 0.0, "lng": 0.0 },
            "boundary": [{ "lat": 0.0, "lng": 0.0 }, { "lat": 0.001, "lng": 0.0 }]
        }))
        .unwrap();
        assert!(input.usable_boundary().is_none());

        if let Some(points) = input.boundary.as_mut() {
            points.push(GeoPoint::new(0.001, 0.001));
        }
        assert_eq!(input.usable_boundary().map(|p| p.len()), Some(3));
    }
}
