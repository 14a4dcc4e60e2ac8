//! Core types for the TaraMap registration pipeline.
//!
//! - [`Point3`]: exact integer 3D coordinates with value equality
//! - [`Rotation`]: the 24 axis-aligned rigid rotations
//! - [`BeaconScan`]: one scanner's local-frame beacon readings

mod point;
mod rotation;
mod scan;

pub use point::Point3;
pub use rotation::Rotation;
pub use scan::BeaconScan;
