use approx::assert_abs_diff_eq;
use cansat_recovery::config::{CalculatorConfig, InputField};
use cansat_recovery::{
    compute_sizing, Advisory, AdvisoryAssessor, ConfigError, DimensionKind, ParachuteType,
    Report, ShapeKind, SizingError, SizingInput, StatusLevel,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use test_case::test_case;

fn sea_level(parachute: ParachuteType) -> SizingInput {
    SizingInput::new(1.0, 5.0, 1.225, parachute.shape_kind())
}

#[test_case(ParachuteType::Round, 0.6407, &[DimensionKind::Diameter, DimensionKind::SpillHole], 8; "round")]
#[test_case(ParachuteType::Cruciform, 0.8008, &[DimensionKind::EquivalentDiameter], 8; "cruciform")]
#[test_case(ParachuteType::Square, 0.7118, &[DimensionKind::SideLength], 4; "square")]
#[test_case(ParachuteType::Hexagonal, 0.5824, &[DimensionKind::SideLength], 6; "hexagonal")]
#[test_case(ParachuteType::Elliptical, 0.6744, &[DimensionKind::EquivalentDiameter], 8; "elliptical")]
fn sizes_every_catalog_parachute(
    parachute: ParachuteType,
    area: f64,
    dimensions: &[DimensionKind],
    lines: u32,
) {
    let result = compute_sizing(&sea_level(parachute)).unwrap();

    assert_abs_diff_eq!(result.canopy_area, area, epsilon = 1e-4);
    let kinds: Vec<DimensionKind> = result.dimensions.iter().map(|d| d.kind).collect();
    assert_eq!(kinds, dimensions);
    assert_eq!(result.line_count, lines);
    assert_abs_diff_eq!(result.impact_energy, 12.5, epsilon = 1e-12);
}

#[test]
fn cruciform_matches_equivalent_round_canopy_of_same_area() {
    let cross = compute_sizing(&sea_level(ParachuteType::Cruciform)).unwrap();
    let diameter = cross.dimension(DimensionKind::EquivalentDiameter).unwrap();

    let equivalent = (4.0 * cross.canopy_area / std::f64::consts::PI).sqrt();
    assert_abs_diff_eq!(diameter, equivalent, epsilon = 5e-4);
    assert_abs_diff_eq!(cross.line_length, 1.2 * diameter, epsilon = 1e-3);
}

#[test]
fn packing_warning_takes_precedence() {
    let input = sea_level(ParachuteType::Round).with_packing_height(3.0);
    let report = Report::generate(input, &AdvisoryAssessor::default()).unwrap();

    assert_abs_diff_eq!(report.result.min_packed_diameter().unwrap(), 90.3, epsilon = 0.1);
    assert!(matches!(report.advisory, Advisory::PackingTooLarge { .. }));
    assert_eq!(report.advisory.level(), StatusLevel::Warning);
}

#[test]
fn high_energy_without_packing() {
    let input = SizingInput::new(1.0, 6.0, 1.225, ShapeKind::Square);
    let report = Report::generate(input, &AdvisoryAssessor::default()).unwrap();

    assert_abs_diff_eq!(report.result.impact_energy, 18.0, epsilon = 1e-12);
    assert_eq!(report.advisory.level(), StatusLevel::Error);
}

#[test_case(0.0, 1.225; "zero velocity")]
#[test_case(5.0, 0.0; "zero density")]
fn degenerate_conditions_fail(velocity: f64, density: f64) {
    let input =
        SizingInput::new(1.0, velocity, density, ShapeKind::Circle).with_packing_height(3.0);
    let err = compute_sizing(&input).unwrap_err();
    assert!(matches!(err, SizingError::InvalidInput { .. }), "{}", err);
}

// Sweep the form's input ranges: results are finite, positive and repeatable.
#[test]
fn random_inputs_within_form_bounds() {
    let mut rng = StdRng::seed_from_u64(0x0CA5_5A7);
    let sample = |rng: &mut StdRng, field: InputField| {
        let bounds = field.bounds();
        rng.gen_range(bounds.min..=bounds.max)
    };

    for _ in 0..500 {
        let parachute = ParachuteType::ALL[rng.gen_range(0..ParachuteType::ALL.len())];
        let density = sample(&mut rng, InputField::AirDensity).max(0.001);
        let input = SizingInput::new(
            sample(&mut rng, InputField::Mass),
            sample(&mut rng, InputField::DescentVelocity),
            density,
            parachute.shape_kind(),
        )
        .with_packing_height(sample(&mut rng, InputField::PackingHeight));

        let result = compute_sizing(&input).unwrap();
        assert!(result.canopy_area.is_finite() && result.canopy_area > 0.0);
        assert!(result.line_length.is_finite() && result.line_length > 0.0);
        assert!(result.dimensions.iter().all(|d| d.value.is_finite() && d.value >= 0.0));
        assert!(result.min_packed_diameter().unwrap() > 0.0);
        assert_eq!(compute_sizing(&input).unwrap(), result);
    }
}

#[test]
fn loads_config_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "thresholds": { "packing_diameter_limit_mm": 100.0 },
            "defaults": { "parachute": "Square", "packing_height": 6.0 }
        }"#,
    )?;

    let config = CalculatorConfig::load(Some(path.as_path()))?;
    assert_eq!(config.thresholds.packing_diameter_limit_mm, 100.0);
    assert_eq!(config.thresholds.impact_energy_limit_j, 15.0);
    assert_eq!(config.defaults.parachute, ParachuteType::Square);

    let input = SizingInput::new(1.0, 5.0, 1.225, config.defaults.parachute.shape_kind())
        .with_packing_height(config.defaults.packing_height);
    let report = Report::generate(input, &AdvisoryAssessor::new(&config.thresholds))?;
    assert_eq!(report.advisory, Advisory::SafeLanding);
    Ok(())
}

#[test]
fn malformed_config_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json")?;

    assert!(matches!(
        CalculatorConfig::load(Some(path.as_path())),
        Err(ConfigError::Parse { .. })
    ));
    assert!(matches!(
        CalculatorConfig::load(Some(dir.path().join("missing.json").as_path())),
        Err(ConfigError::Io { .. })
    ));
    Ok(())
}
