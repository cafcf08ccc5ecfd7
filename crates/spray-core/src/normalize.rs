//! Input validation and default substitution.

use crate::error::PlanningError;
use crate::models::PlanningInput;
use crate::rules::PlanningRules;

/// Equipment parameters after defaulting, plus derived quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedParams {
    pub pass_spacing_m: f64,
    pub cruise_speed_kmh: f64,
    pub speed_ms: f64,
    pub battery_autonomy_min: f64,
    pub tank_capacity_l: f64,
    pub refill_time_min: f64,
    pub turn_time_s: f64,
    pub drone_count: u32,
}

impl NormalizedParams {
    pub fn turn_time_min(&self) -> f64 {
        self.turn_time_s / 60.0
    }
}

/// Reject inputs the planner cannot work with and default the rest.
///
/// Hectares and application rate are mandatory; every optional equipment
/// value that is missing or at/below the rules epsilon is replaced silently.
pub fn normalize(
    input: &PlanningInput,
    rules: &PlanningRules,
) -> Result<NormalizedParams, PlanningError> {
    if input.hectares.is_nan() || input.hectares <= 0.0 {
        return Err(PlanningError::InvalidInput {
            field: "hectares",
            value: input.hectares,
        });
    }
    if input.application_rate_l_ha.is_nan() || input.application_rate_l_ha <= 0.0 {
        return Err(PlanningError::InvalidInput {
            field: "application_rate_l_ha",
            value: input.application_rate_l_ha,
        });
    }

    let eq = &input.equipment;
    let eps = rules.epsilon;
    let cruise_speed_kmh = or_default(
        "cruise_speed_kmh",
        eq.cruise_speed_kmh,
        rules.default_cruise_speed_kmh,
        eps,
    );

    Ok(NormalizedParams {
        pass_spacing_m: or_default(
            "pass_spacing_m",
            eq.pass_spacing_m,
            rules.default_pass_spacing_m,
            eps,
        ),
        cruise_speed_kmh,
        speed_ms: cruise_speed_kmh / 3.6,
        battery_autonomy_min: or_default(
            "battery_autonomy_min",
            eq.battery_autonomy_min,
            rules.default_battery_autonomy_min,
            eps,
        ),
        tank_capacity_l: or_default(
            "tank_capacity_l",
            eq.tank_capacity_l,
            rules.default_tank_capacity_l,
            eps,
        ),
        refill_time_min: or_default(
            "refill_time_min",
            eq.refill_time_min,
            rules.default_refill_time_min,
            eps,
        ),
        turn_time_s: or_default("turn_time_s", eq.turn_time_s, rules.default_turn_time_s, eps),
        drone_count: input.drone_count.max(1),
    })
}

fn or_default(name: &str, value: Option<f64>, default: f64, eps: f64) -> f64 {
    match value {
        Some(v) if v > eps => v,
        Some(v) => {
            tracing::debug!(
                parameter = name,
                given = v,
                fallback = default,
                "Using default for non-positive parameter"
            );
            default
        }
        None => default,
    }
}
