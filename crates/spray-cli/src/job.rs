//! Job files: planning input as JSON, with field size optionally derived
//! from the boundary outline.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use spray_core::{boundary_metrics, EquipmentParams, GeoPoint, PlanningInput};

/// On-disk job description.
///
/// Same shape as [`PlanningInput`] except that `hectares` and the two
/// extents may be left out when `boundary` has three or more vertices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobFile {
    pub job_id: i64,
    #[serde(default)]
    pub lot_id: Option<i64>,
    #[serde(default)]
    pub hectares: Option<f64>,
    #[serde(default)]
    pub extent_east_west_m: Option<f64>,
    #[serde(default)]
    pub extent_north_south_m: Option<f64>,
    pub application_rate_l_ha: f64,
    pub refill_point: GeoPoint,
    #[serde(default)]
    pub wind_bearing_deg: f64,
    #[serde(default)]
    pub wind_speed: f64,
    #[serde(default)]
    pub equipment: EquipmentParams,
    #[serde(default)]
    pub centroid: Option<GeoPoint>,
    #[serde(default)]
    pub drone_count: Option<u32>,
    #[serde(default)]
    pub boundary: Option<Vec<GeoPoint>>,
}

impl JobFile {
    /// Read a job from a path, or from stdin when the path is `-`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = if path.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read job from stdin")?;
            buf
        } else {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read job file {}", path.display()))?
        };
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Job file is not valid JSON")
    }

    /// Resolve into planner input. Explicit values win over the boundary.
    pub fn into_input(self) -> Result<PlanningInput> {
        let metrics = self.boundary.as_deref().and_then(boundary_metrics);
        if let Some(m) = &metrics {
            tracing::debug!(
                area_ha = m.area_ha,
                extent_east_west_m = m.extent_east_west_m,
                extent_north_south_m = m.extent_north_south_m,
                "Measured field boundary"
            );
        }

        let hectares = match (self.hectares, &metrics) {
            (Some(ha), _) => ha,
            (None, Some(m)) => m.area_ha,
            (None, None) => bail!("job {} has no hectares and no usable boundary", self.job_id),
        };
        let extent_east_west_m = match (self.extent_east_west_m, &metrics) {
            (Some(v), _) => v,
            (None, Some(m)) => m.extent_east_west_m,
            (None, None) => bail!("job {} has no east-west extent", self.job_id),
        };
        let extent_north_south_m = match (self.extent_north_south_m, &metrics) {
            (Some(v), _) => v,
            (None, Some(m)) => m.extent_north_south_m,
            (None, None) => bail!("job {} has no north-south extent", self.job_id),
        };

        Ok(PlanningInput {
            job_id: self.job_id,
            lot_id: self.lot_id,
            hectares,
            extent_east_west_m,
            extent_north_south_m,
            application_rate_l_ha: self.application_rate_l_ha,
            refill_point: self.refill_point,
            wind_bearing_deg: self.wind_bearing_deg,
            wind_speed: self.wind_speed,
            equipment: self.equipment,
            centroid: self.centroid,
            drone_count: self.drone_count.unwrap_or(1),
            boundary: self.boundary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_values_are_kept() {
        let job = JobFile::parse(
            r#"{
                "job_id": 9,
                "hectares": 2.0,
                "extent_east_west_m": 200.0,
                "extent_north_south_m": 100.0,
                "application_rate_l_ha": 50.0,
                "refill_point": { "lat": -34.0, "lng": -60.0 },
                "equipment": { "pass_spacing_m": 10.0 }
            }"#,
        )
        .unwrap();
        let input = job.into_input().unwrap();
        assert_eq!(input.hectares, 2.0);
        assert_eq!(input.extent_north_south_m, 100.0);
        assert_eq!(input.equipment.pass_spacing_m, Some(10.0));
        assert_eq!(input.drone_count, 1);
    }

    #[test]
    fn missing_size_without_boundary_is_an_error() {
        let job = JobFile::parse(
            r#"{
                "job_id": 3,
                "application_rate_l_ha": 50.0,
                "refill_point": { "lat": -34.0, "lng": -60.0 }
            }"#,
        )
        .unwrap();
        let err = job.into_input().unwrap_err();
        assert!(err.to_string().contains("no hectares"));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(JobFile::parse("{ not json").is_err());
    }
}
