//! Sortie-by-sortie coverage planning.
//!
//! The field is consumed one sortie at a time. Each sortie flies up to the
//! number of passes the tank and battery allow; the last pass of a sortie
//! may be partial when the field runs out.

use crate::capacity::{max_passes_per_battery, max_passes_per_tank, sortie_capacity};
use crate::direction::{select_direction, wind_strategy};
use crate::error::PlanningError;
use crate::models::{
    FlightDirection, FlightSegment, GeoPoint, PlanningInput, PlanningResult, RefillCause,
};
use crate::normalize::{normalize, NormalizedParams};
use crate::rules::{PlanningRules, M2_PER_HECTARE};
use crate::spatial::{boundary_centroid, FlatEarthProjector};
use crate::summary::summarize;

/// Geometry and cost of one full-length pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassGeometry {
    pub length_m: f64,
    pub area_ha: f64,
    pub product_l: f64,
    pub time_min: f64,
}

impl PassGeometry {
    /// Full pass along `direction`, never shorter than the pass spacing.
    pub fn full_pass(
        input: &PlanningInput,
        params: &NormalizedParams,
        direction: FlightDirection,
    ) -> Self {
        let extent = match direction {
            FlightDirection::NorthSouth => input.extent_north_south_m,
            FlightDirection::EastWest => input.extent_east_west_m,
        };
        let length_m = extent.max(params.pass_spacing_m);
        let area_ha = length_m * params.pass_spacing_m / M2_PER_HECTARE;
        let time_min = if params.speed_ms > 0.0 {
            length_m / params.speed_ms / 60.0
        } else {
            0.0
        };

        Self {
            length_m,
            area_ha,
            product_l: area_ha * input.application_rate_l_ha,
            time_min,
        }
    }
}

/// Pass limits for every sortie of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassLimits {
    pub tank: u32,
    pub battery: u32,
}

impl PassLimits {
    pub fn per_sortie(&self) -> u32 {
        self.tank.min(self.battery).max(1)
    }
}

/// Anchor for segment geometry: boundary centroid, then the explicit
/// centroid, then the refill point.
pub fn resolve_anchor(input: &PlanningInput) -> GeoPoint {
    input
        .usable_boundary()
        .and_then(boundary_centroid)
        .or(input.centroid)
        .unwrap_or(input.refill_point)
}

/// Plan a job with the default rules.
pub fn calculate_optimal_plan(input: &PlanningInput) -> Result<PlanningResult, PlanningError> {
    calculate_optimal_plan_with_rules(input, &PlanningRules::default())
}

/// Plan a job, taking parameter defaults and limits from `rules`.
pub fn calculate_optimal_plan_with_rules(
    input: &PlanningInput,
    rules: &PlanningRules,
) -> Result<PlanningResult, PlanningError> {
    let params = normalize(input, rules)?;

    let direction = select_direction(
        input.extent_east_west_m,
        input.extent_north_south_m,
        input.wind_bearing_deg,
    );
    let strategy = wind_strategy(input.wind_bearing_deg, direction);
    let capacity = sortie_capacity(&params, input.application_rate_l_ha, input.hectares, rules);

    tracing::debug!(
        job_id = input.job_id,
        %direction,
        %strategy,
        area_limit_ha = capacity.area_limit_ha,
        "Planning coverage"
    );

    let segments = generate_segments(input, &params, direction, capacity.area_limit_ha, rules);
    let work_plan = summarize(input, &params, direction, strategy, &segments)?;

    tracing::debug!(
        job_id = input.job_id,
        flights = work_plan.total_flights,
        refills = work_plan.refill_count,
        total_time_min = work_plan.total_time_min,
        "Plan ready"
    );

    Ok(PlanningResult {
        work_plan,
        segments,
    })
}

/// Running totals for the sortie being built.
#[derive(Debug, Default)]
struct SortieAccumulator {
    passes: u32,
    area_ha: f64,
    distance_m: f64,
    time_min: f64,
    product_l: f64,
    last_offset_m: f64,
    last_length_m: f64,
}

/// Lay out sorties until the field is covered.
///
/// Every sortie except the last carries a refill cause. The segment note
/// reports the planned pass count, which includes a trailing sliver pass.
pub fn generate_segments(
    input: &PlanningInput,
    params: &NormalizedParams,
    direction: FlightDirection,
    area_limit_ha: f64,
    rules: &PlanningRules,
) -> Vec<FlightSegment> {
    let eps = rules.epsilon;
    let pass = PassGeometry::full_pass(input, params, direction);
    let limits = PassLimits {
        tank: max_passes_per_tank(params.tank_capacity_l, pass.product_l, rules),
        battery: max_passes_per_battery(
            params.battery_autonomy_min,
            pass.time_min,
            params.turn_time_min(),
            rules,
        ),
    };
    let max_passes = limits.per_sortie();
    let projector = FlatEarthProjector::new(resolve_anchor(input));

    tracing::debug!(
        pass_length_m = pass.length_m,
        pass_area_ha = pass.area_ha,
        tank_passes = limits.tank,
        battery_passes = limits.battery,
        "Pass limits resolved"
    );

    let mut segments = Vec::new();
    let mut remaining_ha = input.hectares;
    let mut sequence = 1u32;

    while remaining_ha > eps {
        let target_ha = area_limit_ha.min(remaining_ha);
        let needed = if pass.area_ha > eps {
            // Shave at most eps hectares so 0.8 / 0.1 style noise adds no pass.
            ((target_ha - eps) / pass.area_ha).ceil().max(1.0) as u32
        } else {
            1
        };
        let planned = needed.clamp(1, max_passes);

        let mut sortie = SortieAccumulator {
            last_length_m: pass.length_m,
            ..SortieAccumulator::default()
        };
        for index in 0..planned {
            let left_ha = target_ha - sortie.area_ha;
            if left_ha <= eps {
                continue;
            }
            let area_ha = pass.area_ha.min(left_ha);
            let factor = if pass.area_ha > eps {
                area_ha / pass.area_ha
            } else {
                1.0
            };
            let length_m = pass.length_m * factor;

            if index > 0 {
                sortie.time_min += params.turn_time_min();
            }
            sortie.passes += 1;
            sortie.time_min += pass.time_min * factor;
            sortie.distance_m += length_m;
            sortie.product_l += area_ha * input.application_rate_l_ha;
            sortie.area_ha += area_ha;
            sortie.last_offset_m = index as f64 * params.pass_spacing_m;
            sortie.last_length_m = length_m;
        }

        let left_after_ha = (remaining_ha - sortie.area_ha).max(0.0);
        let more_to_spray = left_after_ha > eps;
        let refill_cause = RefillCause::from_limits(
            more_to_spray && limits.battery == planned,
            more_to_spray && limits.tank == planned,
        );

        let (start, end) =
            projector.pass_endpoints(direction, sortie.last_offset_m, sortie.last_length_m);

        tracing::trace!(
            sequence,
            passes = sortie.passes,
            area_ha = sortie.area_ha,
            refill = ?refill_cause,
            "Sortie planned"
        );

        segments.push(FlightSegment {
            id: 0,
            work_plan_id: 0,
            sequence,
            start,
            end,
            distance_m: sortie.distance_m,
            flight_time_min: (sortie.time_min.round() as u32).max(1),
            area_ha: sortie.area_ha,
            product_l: sortie.product_l,
            requires_refill: refill_cause.is_some(),
            refill_cause,
            note: format!(
                "Passes: {} | Exact time: {:.1} min",
                planned, sortie.time_min
            ),
        });

        remaining_ha -= sortie.area_ha;
        sequence += 1;
    }

    segments
}
