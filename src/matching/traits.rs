//! Traits for scan alignment algorithms.

use std::collections::HashSet;

use crate::core::{BeaconScan, Point3};

use super::ScanPlacement;

/// Trait for algorithms that place an unregistered scan into the global
/// frame.
///
/// The registration engine is generic over this seam so hypothesis-testing
/// strategies can be swapped without touching the worklist logic.
pub trait ScanAligner: Send + Sync {
    /// Attempt to align a scan to the current global beacon set.
    ///
    /// # Arguments
    /// * `global` - beacons already registered in the global frame
    /// * `scan` - the unregistered scan, in its local frame
    ///
    /// # Returns
    /// The scanner's placement on success, `None` when no rotation and
    /// translation reach the overlap threshold.
    fn try_align(&self, global: &HashSet<Point3>, scan: &BeaconScan) -> Option<ScanPlacement>;

    /// Name of this aligner for logging
    fn name(&self) -> &str;
}
