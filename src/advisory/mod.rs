pub mod assessment;
pub mod status;

pub use assessment::AdvisoryAssessor;
pub use status::{Advisory, StatusLevel};
