//! Parachute sizing for a single payload.

use crate::errors::{Result, SizingError};
use crate::models::{ParachuteProfile, SizingInput, SizingResult};
use crate::physics::{canopy, drag, energy, packing};
use tracing::debug;

/// Sizes a parachute for `input`.
///
/// Pure: identical inputs give bit-identical results. Degenerate inputs
/// (non-positive mass, velocity or density, non-finite values, or values
/// whose metrics overflow or underflow `f64`) are rejected rather than
/// producing zero, infinite or NaN metrics.
pub fn compute_sizing(input: &SizingInput) -> Result<SizingResult> {
    let profile = ParachuteProfile::for_shape(input.shape)?;
    validate(input)?;

    let area = drag::canopy_area(
        input.mass,
        input.descent_velocity,
        input.air_density,
        profile.drag_coefficient,
    );
    debug!(
        parachute = profile.name,
        drag_coefficient = profile.drag_coefficient,
        area,
        "sized canopy"
    );
    if !(area.is_finite() && area > 0.0) {
        return Err(SizingError::invalid(
            "canopy_area",
            area,
            "not representable for these inputs",
        ));
    }

    let impact_energy = energy::impact_energy(input.mass, input.descent_velocity);
    if !impact_energy.is_finite() {
        return Err(SizingError::invalid(
            "impact_energy",
            impact_energy,
            "not representable for these inputs",
        ));
    }

    let layout = canopy::layout(profile.shape_kind, area);
    let packing = match input.packing_height {
        Some(height) => {
            let estimate = packing::estimate(area, height);
            debug!(
                packing_height = height,
                packed_volume = estimate.packed_volume,
                min_packed_diameter = estimate.min_packed_diameter,
                "estimated packing"
            );
            if !estimate.min_packed_diameter.is_finite() {
                return Err(SizingError::invalid(
                    "packing_height",
                    height,
                    "too small to estimate a packed diameter",
                ));
            }
            Some(estimate)
        }
        None => None,
    };

    Ok(SizingResult {
        canopy_area: area,
        dimensions: layout.dimensions,
        line_count: layout.line_count,
        line_length: canopy::line_length(area),
        impact_energy,
        packing,
    })
}

fn validate(input: &SizingInput) -> Result<()> {
    let fields = [
        ("mass", input.mass),
        ("descent_velocity", input.descent_velocity),
        ("air_density", input.air_density),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(SizingError::invalid(field, value, "must be finite"));
        }
        if value <= 0.0 {
            return Err(SizingError::invalid(field, value, "must be greater than zero"));
        }
    }

    if let Some(height) = input.packing_height {
        if !height.is_finite() {
            return Err(SizingError::invalid("packing_height", height, "must be finite"));
        }
    }

    Ok(())
}
