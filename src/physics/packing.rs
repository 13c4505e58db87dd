use crate::constants::*;
use crate::models::PackingEstimate;

/// Volume of the folded canopy (m³).
pub fn packed_volume(area: f64) -> f64 {
    area * PACKING_FACTOR
}

/// Smallest cylinder diameter (mm) that holds the folded canopy at the given
/// packing height (cm). A non-positive height yields zero instead of an error.
pub fn min_packed_diameter(packed_volume: f64, packing_height: f64) -> f64 {
    let height = packing_height / CM_PER_M;
    if height <= 0.0 {
        return 0.0;
    }

    let radius = (packed_volume / (PI * height)).sqrt();
    radius * 2.0 * MM_PER_M
}

pub fn estimate(area: f64, packing_height: f64) -> PackingEstimate {
    let packed_volume = packed_volume(area);
    PackingEstimate {
        packed_volume,
        min_packed_diameter: min_packed_diameter(packed_volume, packing_height),
    }
}
