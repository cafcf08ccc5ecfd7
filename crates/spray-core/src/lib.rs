//! Coverage flight planning for agricultural spraying drones.
//!
//! Given a field, wind and equipment limits, [`calculate_optimal_plan`]
//! lays out the sorties needed to spray the whole area and totals them.
//! Planning is pure: no I/O and no state kept between calls.

pub mod capacity;
pub mod direction;
pub mod error;
pub mod models;
pub mod normalize;
pub mod planner;
pub mod rules;
pub mod spatial;
pub mod summary;

pub use error::PlanningError;
pub use models::{
    EquipmentParams, FlightDirection, FlightSegment, GeoPoint, PlanningInput, PlanningResult,
    RefillCause, WindStrategy, WorkPlan,
};
pub use planner::{calculate_optimal_plan, calculate_optimal_plan_with_rules};
pub use rules::PlanningRules;
pub use spatial::{boundary_metrics, haversine_distance, parse_boundary_json, BoundaryMetrics};
