//! Tank and battery limits per sortie.

use crate::normalize::NormalizedParams;
use crate::rules::{PlanningRules, M2_PER_HECTARE};

/// Area limits derived from tank and battery capacity alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortieCapacity {
    /// Hectares one full tank can treat
    pub area_per_tank_ha: f64,
    /// Meters a full battery can fly at cruise speed
    pub battery_distance_m: f64,
    /// Hectares one battery can treat at the configured spacing
    pub area_per_autonomy_ha: f64,
    /// Smaller of the two, or the whole field when both vanish
    pub area_limit_ha: f64,
}

/// Compute the per-sortie area limit.
pub fn sortie_capacity(
    params: &NormalizedParams,
    application_rate_l_ha: f64,
    field_hectares: f64,
    rules: &PlanningRules,
) -> SortieCapacity {
    let area_per_tank_ha = params.tank_capacity_l / application_rate_l_ha;
    let battery_distance_m = params.battery_autonomy_min * 60.0 * params.speed_ms;
    let area_per_autonomy_ha = (battery_distance_m * params.pass_spacing_m) / M2_PER_HECTARE;
    let limit = area_per_tank_ha.min(area_per_autonomy_ha);
    let area_limit_ha = if limit > rules.epsilon {
        limit
    } else {
        field_hectares
    };

    SortieCapacity {
        area_per_tank_ha,
        battery_distance_m,
        area_per_autonomy_ha,
        area_limit_ha,
    }
}

/// Whole passes a full tank can spray, never below one.
pub fn max_passes_per_tank(
    tank_capacity_l: f64,
    product_per_pass_l: f64,
    rules: &PlanningRules,
) -> u32 {
    if product_per_pass_l <= rules.epsilon {
        return 1;
    }
    // Absorb division noise such as 0.3 / 0.1 = 2.9999999999999996 without
    // letting a sortie overdraw the tank by more than eps liters.
    let passes = ((tank_capacity_l + rules.epsilon) / product_per_pass_l).floor();
    clamp_passes(passes, u32::MAX)
}

/// Consecutive passes one battery charge allows.
///
/// Flying `n` passes costs `n * pass_time + (n - 1) * turn_time`, which must
/// stay within the autonomy (plus epsilon). Solved in closed form, floored
/// at one and capped at `rules.max_passes_per_battery`.
pub fn max_passes_per_battery(
    autonomy_min: f64,
    pass_time_min: f64,
    turn_time_min: f64,
    rules: &PlanningRules,
) -> u32 {
    if pass_time_min <= rules.epsilon {
        return 1;
    }
    let passes = ((autonomy_min + rules.epsilon + turn_time_min) / (pass_time_min + turn_time_min))
        .floor();
    clamp_passes(passes, rules.max_passes_per_battery)
}

fn clamp_passes(passes: f64, cap: u32) -> u32 {
    if !passes.is_finite() || passes >= cap as f64 {
        return cap.max(1);
    }
    (passes as u32).clamp(1, cap.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(spacing: f64) -> NormalizedParams {
        NormalizedParams {
            pass_spacing_m: spacing,
            cruise_speed_kmh: 18.0,
            speed_ms: 5.0,
            battery_autonomy_min: 9.0,
            tank_capacity_l: 40.0,
            refill_time_min: 3.0,
            turn_time_s: 12.0,
            drone_count: 1,
        }
    }

    /// Pass-by-pass accumulation the closed form replaces.
    fn simulate_battery_passes(autonomy: f64, pass_time: f64, turn_time: f64, eps: f64) -> u32 {
        let mut elapsed = 0.0;
        let mut passes = 0u32;
        loop {
            let next = pass_time + if passes > 0 { turn_time } else { 0.0 };
            if elapsed + next > autonomy + eps {
                break;
            }
            elapsed += next;
            passes += 1;
            if passes >= 1000 {
                break;
            }
        }
        passes.max(1)
    }

    #[test]
    fn tank_is_the_tighter_limit() {
        let rules = PlanningRules::default();
        let capacity = sortie_capacity(&params(10.0), 50.0, 2.0, &rules);
        assert!((capacity.area_per_tank_ha - 0.8).abs() < 1e-12);
        assert!((capacity.battery_distance_m - 2700.0).abs() < 1e-9);
        assert!((capacity.area_per_autonomy_ha - 2.7).abs() < 1e-9);
        assert!((capacity.area_limit_ha - 0.8).abs() < 1e-12);
    }

    #[test]
    fn vanishing_limits_fall_back_to_field() {
        let rules = PlanningRules::default();
        let mut p = params(10.0);
        p.tank_capacity_l = 1e-9;
        let capacity = sortie_capacity(&p, 50.0, 3.5, &rules);
        assert_eq!(capacity.area_limit_ha, 3.5);
    }

    #[test]
    fn tank_passes() {
        let rules = PlanningRules::default();
        assert_eq!(max_passes_per_tank(40.0, 5.0, &rules), 8);
        assert_eq!(max_passes_per_tank(0.3, 0.1, &rules), 3);
        assert_eq!(max_passes_per_tank(2.0, 5.0, &rules), 1);
        assert_eq!(max_passes_per_tank(40.0, 0.0, &rules), 1);
    }

    #[test]
    fn tank_passes_never_overdraw() {
        let rules = PlanningRules::default();
        // 7.9999995 passes worth of product
        assert_eq!(max_passes_per_tank(79.999995, 10.0, &rules), 7);
        assert_eq!(max_passes_per_tank(80.0, 10.0, &rules), 8);
    }

    #[test]
    fn battery_passes_match_simulation() {
        let rules = PlanningRules::default();
        let cases = [
            (9.0, 100.0 / 5.0 / 60.0, 0.2),
            (9.0, 1.0, 0.0),
            (12.0, 0.75, 0.1),
            (9.0, 10.0, 0.2),
            (20.0, 0.37, 0.05),
            (9.0, 0.5, 0.25),
        ];
        for (autonomy, pass_time, turn_time) in cases {
            assert_eq!(
                max_passes_per_battery(autonomy, pass_time, turn_time, &rules),
                simulate_battery_passes(autonomy, pass_time, turn_time, rules.epsilon),
                "autonomy {autonomy} pass {pass_time} turn {turn_time}"
            );
        }
    }

    #[test]
    fn battery_passes_hit_cap() {
        let rules = PlanningRules::default();
        assert_eq!(max_passes_per_battery(9.0, 1e-4, 0.0, &rules), 1000);
        assert_eq!(max_passes_per_battery(9.0, 0.0, 0.2, &rules), 1);
    }
}
