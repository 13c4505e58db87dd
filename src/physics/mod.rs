pub mod canopy;
pub mod drag;
pub mod energy;
pub mod packing;
