use crate::models::profile::ShapeKind;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One calculation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingInput {
    pub mass: f64,             // kg
    pub descent_velocity: f64, // m/s
    pub air_density: f64,      // kg/m³
    pub shape: ShapeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packing_height: Option<f64>, // cm, enables the packing estimate
}

impl SizingInput {
    pub fn new(mass: f64, descent_velocity: f64, air_density: f64, shape: ShapeKind) -> Self {
        SizingInput {
            mass,
            descent_velocity,
            air_density,
            shape,
            packing_height: None,
        }
    }

    pub fn with_packing_height(mut self, packing_height: f64) -> Self {
        self.packing_height = Some(packing_height);
        self
    }
}

/// Named canopy measurement reported for a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionKind {
    Diameter,
    SpillHole,
    SideLength,
    EquivalentDiameter,
}

impl DimensionKind {
    pub fn label(self) -> &'static str {
        match self {
            DimensionKind::Diameter => "Diameter (m)",
            DimensionKind::SpillHole => "Spill Hole (m)",
            DimensionKind::SideLength => "Side Length (m)",
            DimensionKind::EquivalentDiameter => "Equivalent Dia (m)",
        }
    }
}

impl fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub kind: DimensionKind,
    pub value: f64, // meters, rounded to 3 decimals
}

/// Stowed-canopy estimate for a given packing height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PackingEstimate {
    pub packed_volume: f64,       // m³
    pub min_packed_diameter: f64, // mm
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingResult {
    pub canopy_area: f64, // m²
    #[serde(serialize_with = "serialize_dimensions")]
    pub dimensions: Vec<Dimension>,
    pub line_count: u32,
    pub line_length: f64,   // m
    pub impact_energy: f64, // J
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packing: Option<PackingEstimate>,
}

impl SizingResult {
    pub fn dimension(&self, kind: DimensionKind) -> Option<f64> {
        self.dimensions
            .iter()
            .find(|dimension| dimension.kind == kind)
            .map(|dimension| dimension.value)
    }

    pub fn min_packed_diameter(&self) -> Option<f64> {
        self.packing.map(|packing| packing.min_packed_diameter)
    }
}

// Dimensions render as an ordered label -> value map
fn serialize_dimensions<S: Serializer>(
    dimensions: &[Dimension],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(
        dimensions
            .iter()
            .map(|dimension| (dimension.kind.label(), dimension.value)),
    )
}
