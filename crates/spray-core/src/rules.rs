//! Planning defaults and numeric thresholds.

use serde::{Deserialize, Serialize};

/// Meters spanned by one degree of latitude in the flat-earth model.
pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

/// Square meters per hectare.
pub const M2_PER_HECTARE: f64 = 10_000.0;

/// Configuration for parameter defaults and solver limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningRules {
    /// Default distance between passes (m)
    pub default_pass_spacing_m: f64,
    /// Default cruise speed (km/h)
    pub default_cruise_speed_kmh: f64,
    /// Default battery autonomy (min)
    pub default_battery_autonomy_min: f64,
    /// Default tank capacity (L)
    pub default_tank_capacity_l: f64,
    /// Default refill time (min)
    pub default_refill_time_min: f64,
    /// Default turn time between passes (s)
    pub default_turn_time_s: f64,
    /// Values at or below this are treated as zero
    pub epsilon: f64,
    /// Upper bound on passes a single battery charge may yield
    pub max_passes_per_battery: u32,
}

impl Default for PlanningRules {
    fn default() -> Self {
        Self {
            default_pass_spacing_m: 7.0,
            default_cruise_speed_kmh: 18.0,
            default_battery_autonomy_min: 9.0,
            default_tank_capacity_l: 40.0,
            default_refill_time_min: 3.0,
            default_turn_time_s: 12.0,
            epsilon: 1e-6,
            max_passes_per_battery: 1000,
        }
    }
}
