//! Pass axis selection relative to wind and field shape.

use crate::models::{FlightDirection, WindStrategy};

/// Whether a wind bearing falls in the north/south quadrants.
///
/// The bearing is normalized to [0, 360) first. North/south covers
/// [0, 45), [135, 225] and (315, 360).
pub fn is_wind_north_south(wind_bearing_deg: f64) -> bool {
    let bearing = wind_bearing_deg.rem_euclid(360.0);
    bearing < 45.0 || (135.0..=225.0).contains(&bearing) || bearing > 315.0
}

/// Pick the pass axis for a field.
///
/// North/south wind: fly north-south when the east-west extent is at least
/// the north-south extent, otherwise east-west. East/west wind: fly
/// east-west when the north-south extent is at least the east-west extent,
/// otherwise north-south.
pub fn select_direction(
    extent_east_west_m: f64,
    extent_north_south_m: f64,
    wind_bearing_deg: f64,
) -> FlightDirection {
    if is_wind_north_south(wind_bearing_deg) {
        if extent_east_west_m >= extent_north_south_m {
            FlightDirection::NorthSouth
        } else {
            FlightDirection::EastWest
        }
    } else if extent_north_south_m >= extent_east_west_m {
        FlightDirection::EastWest
    } else {
        FlightDirection::NorthSouth
    }
}

/// Label the relation between the pass axis and the wind axis.
pub fn wind_strategy(wind_bearing_deg: f64, direction: FlightDirection) -> WindStrategy {
    let wind_ns = is_wind_north_south(wind_bearing_deg);
    let aligned = match direction {
        FlightDirection::NorthSouth => wind_ns,
        FlightDirection::EastWest => !wind_ns,
    };
    if aligned {
        WindStrategy::WithWind
    } else {
        WindStrategy::CrossWind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wind_quadrants() {
        for bearing in [0.0, 44.9, 135.0, 180.0, 225.0, 315.1, 359.9, -10.0, 720.0] {
            assert!(is_wind_north_south(bearing), "bearing {bearing}");
        }
        for bearing in [45.0, 90.0, 134.9, 225.1, 270.0, 315.0, -90.0] {
            assert!(!is_wind_north_south(bearing), "bearing {bearing}");
        }
    }

    #[test]
    fn east_wind_on_wide_field_flies_north_south() {
        // East/west wind and north-south extent is not >= east-west extent.
        assert_eq!(select_direction(200.0, 100.0, 90.0), FlightDirection::NorthSouth);
        assert_eq!(select_direction(100.0, 200.0, 90.0), FlightDirection::EastWest);
        assert_eq!(select_direction(150.0, 150.0, 270.0), FlightDirection::EastWest);
    }

    #[test]
    fn north_wind_branch() {
        assert_eq!(select_direction(200.0, 100.0, 0.0), FlightDirection::NorthSouth);
        assert_eq!(select_direction(100.0, 200.0, 180.0), FlightDirection::EastWest);
        assert_eq!(select_direction(150.0, 150.0, 350.0), FlightDirection::NorthSouth);
    }

    #[test]
    fn strategy_labels() {
        assert_eq!(
            wind_strategy(0.0, FlightDirection::NorthSouth),
            WindStrategy::WithWind
        );
        assert_eq!(
            wind_strategy(90.0, FlightDirection::NorthSouth),
            WindStrategy::CrossWind
        );
        assert_eq!(
            wind_strategy(90.0, FlightDirection::EastWest),
            WindStrategy::WithWind
        );
        assert_eq!(
            wind_strategy(200.0, FlightDirection::EastWest),
            WindStrategy::CrossWind
        );
    }
}
