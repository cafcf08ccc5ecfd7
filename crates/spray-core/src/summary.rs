//! Plan totals.

use crate::error::PlanningError;
use crate::models::{FlightDirection, FlightSegment, PlanningInput, WindStrategy, WorkPlan};
use crate::normalize::NormalizedParams;
use crate::spatial::encode_boundary;

/// Total job time in minutes split across the fleet.
///
/// `ceil((sum of segment minutes + refills * refill_time) / drones)`. The
/// fleet is treated as dividing work evenly, with no scheduling or refill
/// queueing between drones.
pub fn total_time_min(segments: &[FlightSegment], refill_time_min: f64, drone_count: u32) -> u32 {
    let flight_min: u64 = segments.iter().map(|s| u64::from(s.flight_time_min)).sum();
    let refills = segments.iter().filter(|s| s.requires_refill).count() as f64;
    let total = flight_min as f64 + refills * refill_time_min;
    (total / f64::from(drone_count.max(1))).ceil() as u32
}

/// Fold segments into the plan header.
pub fn summarize(
    input: &PlanningInput,
    params: &NormalizedParams,
    direction: FlightDirection,
    wind_strategy: WindStrategy,
    segments: &[FlightSegment],
) -> Result<WorkPlan, PlanningError> {
    let boundary_json = input.usable_boundary().map(encode_boundary).transpose()?;

    Ok(WorkPlan {
        id: 0,
        job_id: input.job_id,
        lot_id: input.lot_id,
        battery_autonomy_min: params.battery_autonomy_min,
        tank_capacity_l: params.tank_capacity_l,
        pass_spacing_m: params.pass_spacing_m,
        cruise_speed_kmh: params.cruise_speed_kmh,
        refill_time_min: params.refill_time_min,
        turn_time_s: params.turn_time_s,
        application_rate_l_ha: input.application_rate_l_ha,
        extent_east_west_m: input.extent_east_west_m,
        extent_north_south_m: input.extent_north_south_m,
        total_hectares: input.hectares,
        refill_point: input.refill_point,
        wind_bearing_deg: input.wind_bearing_deg,
        wind_speed: input.wind_speed,
        total_flights: segments.len() as u32,
        total_time_min: total_time_min(segments, params.refill_time_min, params.drone_count),
        total_distance_m: segments.iter().map(|s| s.distance_m).sum(),
        refill_count: segments.iter().filter(|s| s.requires_refill).count() as u32,
        direction,
        wind_strategy,
        drone_count: params.drone_count,
        boundary_json,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GeoPoint, RefillCause};

    fn segment(sequence: u32, minutes: u32, refill: bool) -> FlightSegment {
        FlightSegment {
            id: 0,
            work_plan_id: 0,
            sequence,
            start: GeoPoint::new(0.0, 0.0),
            end: GeoPoint::new(0.0, 0.0),
            distance_m: 100.0,
            flight_time_min: minutes,
            area_ha: 0.1,
            product_l: 5.0,
            requires_refill: refill,
            refill_cause: refill.then_some(RefillCause::Tank),
            note: String::new(),
        }
    }

    #[test]
    fn total_time_adds_refills() {
        let segments = vec![segment(1, 4, true), segment(2, 4, true), segment(3, 2, false)];
        assert_eq!(total_time_min(&segments, 3.0, 1), 16);
    }

    #[test]
    fn total_time_divides_across_drones() {
        let segments = vec![segment(1, 4, true), segment(2, 4, true), segment(3, 2, false)];
        assert_eq!(total_time_min(&segments, 3.0, 2), 8);
        assert_eq!(total_time_min(&segments, 3.0, 3), 6);
        assert_eq!(total_time_min(&segments, 3.0, 0), 16);
        // Ceiling is taken once on the combined fractional total
        assert_eq!(total_time_min(&segments, 2.2, 1), 15);
        assert_eq!(total_time_min(&segments, 2.2, 4), 4);
    }

    #[test]
    fn empty_plan_takes_no_time() {
        assert_eq!(total_time_min(&[], 3.0, 1), 0);
    }
}
