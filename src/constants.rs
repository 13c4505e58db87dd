pub const G: f64 = 9.81; // Gravitational acceleration used for sizing (m/s²)

// Canopy geometry
pub const SPILL_HOLE_RATIO: f64 = 0.12; // Spill hole diameter as a fraction of canopy diameter
pub const HEXAGON_AREA_COEFFICIENT: f64 = 2.598; // (3√3)/2, area of a unit-side regular hexagon
pub const LINE_LENGTH_FACTOR: f64 = 1.2; // Suspension line length per unit equivalent diameter

// Line counts per canopy kind
pub const ROUND_LINE_COUNT: u32 = 8;
pub const SQUARE_LINE_COUNT: u32 = 4;
pub const HEXAGON_LINE_COUNT: u32 = 6;

// Packing
pub const PACKING_FACTOR: f64 = 0.0003; // Stowed volume per m² of canopy (m³/m²)
pub const CM_PER_M: f64 = 100.0;
pub const MM_PER_M: f64 = 1000.0;

// Advisory thresholds
pub const IMPACT_ENERGY_LIMIT_J: f64 = 15.0;
pub const PACKED_DIAMETER_LIMIT_MM: f64 = 60.0;

// Math
pub const PI: f64 = std::f64::consts::PI;
