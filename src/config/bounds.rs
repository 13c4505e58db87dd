use crate::errors::InputError;
use std::fmt;

/// Accepted range and form defaults for one numeric input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Mass,
    DescentVelocity,
    AirDensity,
    PackingHeight,
}

impl InputField {
    pub const ALL: [InputField; 4] = [
        InputField::Mass,
        InputField::DescentVelocity,
        InputField::AirDensity,
        InputField::PackingHeight,
    ];

    pub fn bounds(self) -> FieldBounds {
        match self {
            InputField::Mass => FieldBounds {
                min: 0.1,
                max: 5.0,
                default: 1.0,
                step: 0.1,
            },
            InputField::DescentVelocity => FieldBounds {
                min: 1.0,
                max: 20.0,
                default: 5.0,
                step: 0.5,
            },
            // Zero is accepted here and rejected by the calculator.
            InputField::AirDensity => FieldBounds {
                min: 0.0,
                max: 2.0,
                default: 1.225,
                step: 0.001,
            },
            InputField::PackingHeight => FieldBounds {
                min: 1.0,
                max: 15.0,
                default: 3.0,
                step: 0.5,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InputField::Mass => "Mass (kg)",
            InputField::DescentVelocity => "Descent Velocity (m/s)",
            InputField::AirDensity => "Air Density (kg/m³)",
            InputField::PackingHeight => "Packing Height (cm)",
        }
    }

    /// Returns `value` unchanged when it lies inside the field's range.
    pub fn check(self, value: f64) -> Result<f64, InputError> {
        let FieldBounds { min, max, .. } = self.bounds();
        if value >= min && value <= max {
            Ok(value)
        } else {
            Err(InputError::OutOfRange {
                field: self,
                value,
                min,
                max,
            })
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn defaults_lie_within_bounds() {
        for field in InputField::ALL {
            let bounds = field.bounds();
            assert!(field.check(bounds.default).is_ok(), "{}", field);
            assert!(bounds.step > 0.0 && bounds.step <= bounds.max - bounds.min);
        }
    }

    #[test_case(InputField::Mass, 0.1 => true; "mass lower bound")]
    #[test_case(InputField::Mass, 5.0 => true; "mass upper bound")]
    #[test_case(InputField::Mass, 0.05 => false; "mass too light")]
    #[test_case(InputField::DescentVelocity, 20.5 => false; "velocity too fast")]
    #[test_case(InputField::AirDensity, 0.0 => true; "vacuum accepted by the form")]
    #[test_case(InputField::AirDensity, -0.1 => false; "negative density")]
    #[test_case(InputField::PackingHeight, 0.5 => false; "packing too short")]
    #[test_case(InputField::PackingHeight, 7.25 => true; "off step grid")]
    #[test_case(InputField::Mass, f64::NAN => false; "nan")]
    fn test_check(field: InputField, value: f64) -> bool {
        field.check(value).is_ok()
    }

    #[test]
    fn out_of_range_message_names_field() {
        let err = InputField::DescentVelocity.check(25.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Descent Velocity (m/s) must be between 1 and 20, got 25"
        );
    }
}
