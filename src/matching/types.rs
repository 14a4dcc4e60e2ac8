//! Matching result types.

use std::collections::HashSet;

use crate::core::Point3;

/// Placement of a scan in the global frame, produced by a successful
/// alignment.
#[derive(Clone, Debug)]
pub struct ScanPlacement {
    /// Scanner origin in the global frame (the accepted translation).
    pub origin: Point3,
    /// The scan's beacons expressed in the global frame.
    pub beacons: HashSet<Point3>,
    /// Number of beacons that coincided with the global set when the
    /// alignment was accepted.
    pub overlap: usize,
}
