use serde::Serialize;
use std::fmt;

/// Severity shown next to the headline metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Warning,
    Error,
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatusLevel::Success => write!(f, "OK"),
            StatusLevel::Warning => write!(f, "WARNING"),
            StatusLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Outcome of checking a sizing result against the recovery limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Advisory {
    PackingTooLarge { min_packed_diameter: f64, limit: f64 },
    HighImpactEnergy { impact_energy: f64, limit: f64 },
    SafeLanding,
}

impl Advisory {
    pub fn level(&self) -> StatusLevel {
        match self {
            Advisory::PackingTooLarge { .. } => StatusLevel::Warning,
            Advisory::HighImpactEnergy { .. } => StatusLevel::Error,
            Advisory::SafeLanding => StatusLevel::Success,
        }
    }

    pub fn needs_attention(&self) -> bool {
        self.level() != StatusLevel::Success
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Advisory::PackingTooLarge {
                min_packed_diameter,
                limit,
            } => write!(
                f,
                "Parachute will not fit: needs {:.1} mm, limit is {:.0} mm",
                min_packed_diameter, limit
            ),
            Advisory::HighImpactEnergy {
                impact_energy,
                limit,
            } => write!(
                f,
                "High Impact Energy! {:.2} J (limit {:.0} J)",
                impact_energy, limit
            ),
            Advisory::SafeLanding => write!(f, "Safe Landing Energy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Advisory::SafeLanding => false; "safe landing")]
    #[test_case(Advisory::PackingTooLarge { min_packed_diameter: 90.3, limit: 60.0 } => true; "packing warning")]
    #[test_case(Advisory::HighImpactEnergy { impact_energy: 18.0, limit: 15.0 } => true; "energy error")]
    fn test_needs_attention(advisory: Advisory) -> bool {
        advisory.needs_attention()
    }
}
