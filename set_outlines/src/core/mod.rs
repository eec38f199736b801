//! Core module has the shared numeric traits and 2D math used by every other module.
pub mod math;
pub mod traits;
