//! A scanner's beacon readings in its own local frame.

use std::collections::HashSet;

use super::{Point3, Rotation};

/// One scanner's set of beacon detections.
///
/// Readings are expressed in the scanner's local frame, whose orientation
/// and translation relative to the global frame are unknown until the scan
/// is registered. The set is never mutated after creation; duplicates in
/// the source data collapse by value.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BeaconScan {
    beacons: HashSet<Point3>,
}

impl BeaconScan {
    /// Create a scan from a set of beacon readings
    pub fn new(beacons: HashSet<Point3>) -> Self {
        Self { beacons }
    }

    /// Number of distinct beacons in this scan
    pub fn len(&self) -> usize {
        self.beacons.len()
    }

    /// True when the scan holds no beacons
    pub fn is_empty(&self) -> bool {
        self.beacons.is_empty()
    }

    /// Whether the scan contains a given reading
    pub fn contains(&self, point: &Point3) -> bool {
        self.beacons.contains(point)
    }

    /// Iterate over the readings
    pub fn iter(&self) -> impl Iterator<Item = &Point3> {
        self.beacons.iter()
    }

    /// Borrow the underlying point set
    pub fn points(&self) -> &HashSet<Point3> {
        &self.beacons
    }

    /// Consume the scan, yielding its point set
    pub fn into_points(self) -> HashSet<Point3> {
        self.beacons
    }

    /// All readings rotated about the local origin
    pub fn rotated(&self, rotation: &Rotation) -> Vec<Point3> {
        self.beacons.iter().map(|p| rotation.apply(*p)).collect()
    }

    /// All readings shifted by a translation delta
    pub fn translated(&self, delta: Point3) -> HashSet<Point3> {
        self.beacons.iter().map(|p| *p + delta).collect()
    }
}

impl FromIterator<Point3> for BeaconScan {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        Self {
            beacons: iter.into_iter().collect(),
        }
    }
}
