use crate::errors::{InputError, Result, SizingError};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Planform of a canopy. Selects which dimensions are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Cross,
    Square,
    Hexagon,
    Ellipse,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Cross => "cross",
            ShapeKind::Square => "square",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Ellipse => "ellipse",
        };
        f.pad(name)
    }
}

/// Parachute designs offered by the calculator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParachuteType {
    #[default]
    Round,
    Cruciform,
    Square,
    Hexagonal,
    Elliptical,
}

impl ParachuteType {
    pub const ALL: [ParachuteType; 5] = [
        ParachuteType::Round,
        ParachuteType::Cruciform,
        ParachuteType::Square,
        ParachuteType::Hexagonal,
        ParachuteType::Elliptical,
    ];

    pub fn profile(self) -> &'static ParachuteProfile {
        // CATALOG is declared in the same order as the enum
        &CATALOG[self as usize]
    }

    pub fn shape_kind(self) -> ShapeKind {
        self.profile().shape_kind
    }
}

impl fmt::Display for ParachuteType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.profile().name)
    }
}

impl FromStr for ParachuteType {
    type Err = InputError;

    /// Accepts a catalog name ("Round") or a shape kind ("circle"), case-insensitively.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PROFILES_BY_NAME
            .get(s.trim().to_ascii_lowercase().as_str())
            .map(|profile| profile.parachute)
            .ok_or_else(|| InputError::UnknownParachute(s.to_string()))
    }
}

/// Fixed aerodynamic data for one parachute design.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParachuteProfile {
    pub parachute: ParachuteType,
    pub name: &'static str,
    pub drag_coefficient: f64,
    pub shape_kind: ShapeKind,
}

impl ParachuteProfile {
    /// Returns the catalog entry whose canopy has the given shape.
    pub fn for_shape(kind: ShapeKind) -> Result<&'static ParachuteProfile> {
        CATALOG
            .iter()
            .find(|profile| profile.shape_kind == kind)
            .ok_or(SizingError::UnknownShape(kind))
    }

    pub fn catalog() -> &'static [ParachuteProfile] {
        &CATALOG
    }
}

pub static CATALOG: [ParachuteProfile; 5] = [
    ParachuteProfile {
        parachute: ParachuteType::Round,
        name: "Round",
        drag_coefficient: 1.0,
        shape_kind: ShapeKind::Circle,
    },
    ParachuteProfile {
        parachute: ParachuteType::Cruciform,
        name: "Cruciform",
        drag_coefficient: 0.8,
        shape_kind: ShapeKind::Cross,
    },
    ParachuteProfile {
        parachute: ParachuteType::Square,
        name: "Square",
        drag_coefficient: 0.9,
        shape_kind: ShapeKind::Square,
    },
    ParachuteProfile {
        parachute: ParachuteType::Hexagonal,
        name: "Hexagonal",
        drag_coefficient: 1.1,
        shape_kind: ShapeKind::Hexagon,
    },
    ParachuteProfile {
        parachute: ParachuteType::Elliptical,
        name: "Elliptical",
        drag_coefficient: 0.95,
        shape_kind: ShapeKind::Ellipse,
    },
];

lazy_static! {
    // Lowercased catalog names and shape kinds -> profile
    static ref PROFILES_BY_NAME: HashMap<String, &'static ParachuteProfile> = {
        let mut map = HashMap::new();
        for profile in CATALOG.iter() {
            map.insert(profile.name.to_ascii_lowercase(), profile);
            map.insert(profile.shape_kind.to_string(), profile);
        }
        map
    };
}
