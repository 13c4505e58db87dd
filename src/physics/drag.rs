use crate::constants::G;

/// Canopy area at which drag balances payload weight at the given descent velocity.
///
/// Solves `m g = ½ Cd ρ A v²` for `A`. Callers must reject non-positive
/// density and velocity before calling.
pub fn canopy_area(
    mass: f64,
    descent_velocity: f64,
    air_density: f64,
    drag_coefficient: f64,
) -> f64 {
    (2.0 * mass * G) / (drag_coefficient * air_density * descent_velocity.powi(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    fn drag_force(area: f64, velocity: f64, air_density: f64, drag_coefficient: f64) -> f64 {
        0.5 * drag_coefficient * area * air_density * velocity.powi(2)
    }

    #[test_case(1.0, 5.0, 1.225, 1.0, 0.6406; "round canopy sea level")]
    #[test_case(1.0, 5.0, 1.225, 0.9, 0.7119; "square canopy sea level")]
    #[test_case(0.35, 8.0, 1.225, 0.8, 0.1095; "small cruciform")]
    #[test_case(5.0, 1.0, 1.225, 1.1, 72.8015; "heavy slow hexagon")]
    fn test_canopy_area(mass: f64, velocity: f64, density: f64, cd: f64, expected: f64) {
        assert_abs_diff_eq!(canopy_area(mass, velocity, density, cd), expected, epsilon = 1e-4);
    }

    #[test]
    fn sized_canopy_supports_payload_weight() {
        let mass = 1.0;
        let area = canopy_area(mass, 5.0, 1.225, 0.95);
        assert_abs_diff_eq!(drag_force(area, 5.0, 1.225, 0.95), mass * G, epsilon = 1e-9);
    }
}
