pub mod profile;
pub mod sizing;

pub use profile::{ParachuteProfile, ParachuteType, ShapeKind};
pub use sizing::{Dimension, DimensionKind, PackingEstimate, SizingInput, SizingResult};
