pub mod bounds;
pub mod settings;

pub use bounds::{FieldBounds, InputField};
pub use settings::{AdvisoryThresholds, CalculatorConfig, InputDefaults};
