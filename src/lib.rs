//! # CanSat Recovery
//!
//! Parachute sizing for small recoverable payloads: canopy area, per-shape
//! dimensions, suspension lines, touchdown energy and a packing-fit estimate.

pub mod advisory;
pub mod calculator;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod numerics;
pub mod physics;
pub mod report;

pub use advisory::{Advisory, AdvisoryAssessor, StatusLevel};
pub use calculator::compute_sizing;
pub use config::CalculatorConfig;
pub use errors::{ConfigError, InputError, ReportError, Result, SizingError};
pub use models::{
    Dimension, DimensionKind, PackingEstimate, ParachuteProfile, ParachuteType, ShapeKind,
    SizingInput, SizingResult,
};
pub use report::Report;
