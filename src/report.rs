//! Rendering of sizing results and the parachute catalog.

use crate::advisory::{Advisory, AdvisoryAssessor};
use crate::calculator::compute_sizing;
use crate::errors::{ReportError, SizingError};
use crate::models::{ParachuteProfile, SizingInput, SizingResult};
use serde::Serialize;
use std::io::Write;

/// A sizing result together with the request and advisory that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub parachute: &'static ParachuteProfile,
    pub input: SizingInput,
    pub result: SizingResult,
    pub advisory: Advisory,
}

impl Report {
    pub fn generate(input: SizingInput, assessor: &AdvisoryAssessor) -> Result<Self, SizingError> {
        let parachute = ParachuteProfile::for_shape(input.shape)?;
        let result = compute_sizing(&input)?;
        let advisory = assessor.assess(&result);
        Ok(Report {
            parachute,
            input,
            result,
            advisory,
        })
    }

    pub fn write_table<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        let result = &self.result;

        writeln!(out, "CanSat Recovery Calculator")?;
        writeln!(
            out,
            "Parachute:      {} ({}, Cd {:.2})",
            self.parachute.name, self.parachute.shape_kind, self.parachute.drag_coefficient
        )?;
        writeln!(out)?;
        writeln!(out, "Area:           {:.4} m²", result.canopy_area)?;
        writeln!(out, "Line Length:    {:.3} m", result.line_length)?;
        writeln!(out, "Impact Energy:  {:.2} J", result.impact_energy)?;
        writeln!(out, "Status:         [{}] {}", self.advisory.level(), self.advisory)?;
        writeln!(out)?;
        writeln!(out, "Dimensions:")?;
        for dimension in &result.dimensions {
            writeln!(out, "  {}: {:.3}", dimension.kind, dimension.value)?;
        }
        writeln!(out, "  Lines: {}", result.line_count)?;

        if let (Some(packing), Some(height)) = (result.packing, self.input.packing_height) {
            writeln!(out)?;
            writeln!(out, "Packing ({:.1} cm tall):", height)?;
            writeln!(out, "  Packed Volume:       {:.3e} m³", packing.packed_volume)?;
            writeln!(out, "  Min Packed Diameter: {:.1} mm", packing.min_packed_diameter)?;
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }

    /// One header row and one data row. Dimension columns depend on the shape.
    pub fn write_csv<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        let result = &self.result;
        let packing = result.packing;
        let optional = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();

        let mut header: Vec<String> = [
            "parachute",
            "shape",
            "mass_kg",
            "descent_velocity_mps",
            "air_density_kgm3",
            "packing_height_cm",
            "canopy_area_m2",
            "line_count",
            "line_length_m",
            "impact_energy_j",
            "packed_volume_m3",
            "min_packed_diameter_mm",
            "status",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let mut row = vec![
            self.parachute.name.to_string(),
            self.parachute.shape_kind.to_string(),
            self.input.mass.to_string(),
            self.input.descent_velocity.to_string(),
            self.input.air_density.to_string(),
            optional(self.input.packing_height),
            result.canopy_area.to_string(),
            result.line_count.to_string(),
            result.line_length.to_string(),
            result.impact_energy.to_string(),
            optional(packing.map(|p| p.packed_volume)),
            optional(packing.map(|p| p.min_packed_diameter)),
            self.advisory.level().to_string(),
        ];
        for dimension in &result.dimensions {
            header.push(dimension.kind.label().to_string());
            row.push(dimension.value.to_string());
        }

        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(&header)?;
        writer.write_record(&row)?;
        writer.flush()?;
        Ok(())
    }
}

pub fn write_catalog_table<W: Write>(out: &mut W) -> Result<(), ReportError> {
    writeln!(out, "{:<12} {:<8} {:>5}", "Parachute", "Shape", "Cd")?;
    for profile in ParachuteProfile::catalog() {
        writeln!(
            out,
            "{:<12} {:<8} {:>5.2}",
            profile.name, profile.shape_kind, profile.drag_coefficient
        )?;
    }
    Ok(())
}

pub fn write_catalog_json<W: Write>(out: &mut W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut *out, ParachuteProfile::catalog())?;
    writeln!(out)?;
    Ok(())
}

pub fn write_catalog_csv<W: Write>(out: &mut W) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["parachute", "shape", "drag_coefficient"])?;
    for profile in ParachuteProfile::catalog() {
        writer.write_record([
            profile.name.to_string(),
            profile.shape_kind.to_string(),
            profile.drag_coefficient.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
