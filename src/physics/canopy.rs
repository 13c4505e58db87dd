use crate::constants::*;
use crate::models::{Dimension, DimensionKind, ShapeKind};
use crate::numerics::round_to;

/// Reported measurements and suspension line count for one canopy.
#[derive(Debug, Clone, PartialEq)]
pub struct CanopyLayout {
    pub dimensions: Vec<Dimension>,
    pub line_count: u32,
}

/// Diameter of the circle with the given area.
pub fn equivalent_diameter(area: f64) -> f64 {
    (4.0 * area / PI).sqrt()
}

/// Suspension line length. Always derived from the equivalent diameter,
/// whatever the canopy planform.
pub fn line_length(area: f64) -> f64 {
    LINE_LENGTH_FACTOR * equivalent_diameter(area)
}

pub fn layout(shape: ShapeKind, area: f64) -> CanopyLayout {
    let dimension = |kind, value: f64| Dimension {
        kind,
        value: round_to(value, 3),
    };

    match shape {
        ShapeKind::Circle => {
            let diameter = equivalent_diameter(area);
            CanopyLayout {
                dimensions: vec![
                    dimension(DimensionKind::Diameter, diameter),
                    dimension(DimensionKind::SpillHole, diameter * SPILL_HOLE_RATIO),
                ],
                line_count: ROUND_LINE_COUNT,
            }
        }
        ShapeKind::Square => CanopyLayout {
            dimensions: vec![dimension(DimensionKind::SideLength, area.sqrt())],
            line_count: SQUARE_LINE_COUNT,
        },
        ShapeKind::Hexagon => CanopyLayout {
            dimensions: vec![dimension(
                DimensionKind::SideLength,
                (area / HEXAGON_AREA_COEFFICIENT).sqrt(),
            )],
            line_count: HEXAGON_LINE_COUNT,
        },
        // Cruciform canopies have no arm-specific sizing and are reported
        // like ellipses, as an equivalent round canopy.
        ShapeKind::Cross | ShapeKind::Ellipse => CanopyLayout {
            dimensions: vec![dimension(
                DimensionKind::EquivalentDiameter,
                equivalent_diameter(area),
            )],
            line_count: ROUND_LINE_COUNT,
        },
    }
}
