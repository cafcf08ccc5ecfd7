//! Plan rendering for the terminal.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;
use spray_core::PlanningResult;

/// JSON document printed by `plan_job`.
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: &'a PlanningResult,
}

impl<'a> PlanReport<'a> {
    pub fn new(result: &'a PlanningResult) -> Self {
        Self {
            generated_at: Utc::now(),
            result,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Human-readable summary: header, one line per sortie, totals.
pub fn render_text(result: &PlanningResult) -> String {
    let plan = &result.work_plan;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Job {} | {:.2} ha | passes {} ({}) | spacing {:.1} m | {:.1} km/h",
        plan.job_id,
        plan.total_hectares,
        plan.direction,
        plan.wind_strategy,
        plan.pass_spacing_m,
        plan.cruise_speed_kmh
    );
    for segment in &result.segments {
        let refill = segment
            .refill_cause
            .map(|cause| format!(" refill:{}", cause.as_str()))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "#{:<3} {:>7.3} ha {:>7.2} L {:>7.1} m {:>3} min  ({:.6},{:.6}) -> ({:.6},{:.6}){}  {}",
            segment.sequence,
            segment.area_ha,
            segment.product_l,
            segment.distance_m,
            segment.flight_time_min,
            segment.start.lat,
            segment.start.lng,
            segment.end.lat,
            segment.end.lng,
            refill,
            segment.note
        );
    }
    let _ = writeln!(
        out,
        "Flights: {} | Refills: {} | Distance: {:.0} m | Time: {} min with {} drone(s)",
        plan.total_flights,
        plan.refill_count,
        plan.total_distance_m,
        plan.total_time_min,
        plan.drone_count
    );
    out
}
