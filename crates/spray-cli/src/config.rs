//! CLI configuration from environment.

use std::env;
use std::str::FromStr;

use clap::ValueEnum;
use spray_core::PlanningRules;

/// How plans are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON document
    #[default]
    Json,
    /// One line per sortie plus totals
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub output: OutputFormat,
    pub rules: PlanningRules,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset or unparsable values
    /// keep their defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let number = |key: &str| var(key).and_then(|s| s.trim().parse::<f64>().ok());
        let defaults = PlanningRules::default();

        Self {
            output: var("SPRAY_OUTPUT")
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            rules: PlanningRules {
                default_pass_spacing_m: number("SPRAY_DEFAULT_PASS_SPACING_M")
                    .unwrap_or(defaults.default_pass_spacing_m),
                default_cruise_speed_kmh: number("SPRAY_DEFAULT_SPEED_KMH")
                    .unwrap_or(defaults.default_cruise_speed_kmh),
                default_battery_autonomy_min: number("SPRAY_DEFAULT_AUTONOMY_MIN")
                    .unwrap_or(defaults.default_battery_autonomy_min),
                default_tank_capacity_l: number("SPRAY_DEFAULT_TANK_L")
                    .unwrap_or(defaults.default_tank_capacity_l),
                default_refill_time_min: number("SPRAY_DEFAULT_REFILL_MIN")
                    .unwrap_or(defaults.default_refill_time_min),
                default_turn_time_s: number("SPRAY_DEFAULT_TURN_S")
                    .unwrap_or(defaults.default_turn_time_s),
                ..defaults
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_vars(|_| None);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.rules, PlanningRules::default());
    }

    #[test]
    fn overrides_are_read() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("SPRAY_OUTPUT", "TEXT"),
            ("SPRAY_DEFAULT_TANK_L", "16"),
            ("SPRAY_DEFAULT_TURN_S", " 8.5 "),
            ("SPRAY_DEFAULT_SPEED_KMH", "fast"),
        ]);
        let config = Config::from_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.rules.default_tank_capacity_l, 16.0);
        assert_eq!(config.rules.default_turn_time_s, 8.5);
        assert_eq!(config.rules.default_cruise_speed_kmh, 18.0);
    }
}
