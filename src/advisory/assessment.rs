use super::status::Advisory;
use crate::config::AdvisoryThresholds;
use crate::models::SizingResult;
use tracing::warn;

/// Applies the recovery limits to a sizing result.
///
/// Packing fit is checked before impact energy; only the first failing
/// check is reported.
pub struct AdvisoryAssessor {
    packing_diameter_limit: f64, // mm
    impact_energy_limit: f64,    // J
}

impl AdvisoryAssessor {
    pub fn new(thresholds: &AdvisoryThresholds) -> Self {
        Self {
            packing_diameter_limit: thresholds.packing_diameter_limit_mm,
            impact_energy_limit: thresholds.impact_energy_limit_j,
        }
    }

    pub fn assess(&self, result: &SizingResult) -> Advisory {
        let advisory = self.evaluate(result);
        if advisory.needs_attention() {
            warn!(%advisory, "recovery limit exceeded");
        }
        advisory
    }

    fn evaluate(&self, result: &SizingResult) -> Advisory {
        if let Some(diameter) = result.min_packed_diameter() {
            if diameter > self.packing_diameter_limit {
                return Advisory::PackingTooLarge {
                    min_packed_diameter: diameter,
                    limit: self.packing_diameter_limit,
                };
            }
        }

        if result.impact_energy >= self.impact_energy_limit {
            return Advisory::HighImpactEnergy {
                impact_energy: result.impact_energy,
                limit: self.impact_energy_limit,
            };
        }

        Advisory::SafeLanding
    }
}

impl Default for AdvisoryAssessor {
    fn default() -> Self {
        Self::new(&AdvisoryThresholds::default())
    }
}
