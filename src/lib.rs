//! # TaraMap
//!
//! Reconstruction of a single global 3D beacon map from multiple scanner
//! readings, each reported in its own unknown-orientation,
//! unknown-translation local frame.
//!
//! ## Overview
//!
//! Every scanner detects a set of beacons as exact integer coordinates in
//! its own frame. Scanner 0 defines the global frame. For each remaining
//! scan the aligner tries all 24 axis-aligned rigid rotations and every
//! anchor/beacon translation hypothesis; an alignment is accepted once at
//! least 12 beacons coincide with the already-registered set. Successes
//! merge into the map, failures are requeued and retried once the map has
//! grown.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tara_map::{RegistrationEngine, io::read_scan_set};
//!
//! let scans = read_scan_set("scans.txt".as_ref())?;
//! let report = RegistrationEngine::with_defaults().run(scans)?;
//!
//! println!("distinct beacons: {}", report.map.beacon_count());
//! println!("max scanner separation: {:?}", report.map.max_scanner_separation());
//! ```
//!
//! ## Coordinate System
//!
//! Right-handed integer lattice; the 24 catalog rotations are exactly the
//! orientation-preserving axis permutations and sign flips.

#![warn(missing_docs)]

// Core types
pub mod core;

// Unified configuration
pub mod config;

// Scan-to-map alignment
pub mod matching;

// Worklist registration engine
pub mod registration;

// Scan set text input
pub mod io;

use std::collections::HashSet;

// Re-export commonly used types
pub use config::{ConfigLoadError, TaraConfig};
pub use core::{BeaconScan, Point3, Rotation};
pub use matching::{AlignerConfig, BruteForceAligner, ScanAligner, ScanPlacement};
pub use registration::{EngineConfig, RegistrationEngine, RegistrationError, RegistrationReport};

/// The shared global frame: deduplicated beacons plus scanner origins.
///
/// Both sets only ever grow. Scanner 0's origin is fixed at (0, 0, 0) when
/// the map is seeded; every merge adds one origin and unions one scan's
/// translated beacons.
#[derive(Clone, Debug, Default)]
pub struct BeaconMap {
    beacons: HashSet<Point3>,
    origins: HashSet<Point3>,
}

impl BeaconMap {
    /// Seed the global frame with scanner 0's raw readings.
    pub fn seeded(scan: BeaconScan) -> Self {
        Self {
            beacons: scan.into_points(),
            origins: HashSet::from([Point3::ORIGIN]),
        }
    }

    /// Merge a registered scan's placement into the map.
    pub fn merge(&mut self, placement: ScanPlacement) {
        self.beacons.extend(placement.beacons);
        self.origins.insert(placement.origin);
    }

    /// All registered beacons in the global frame.
    pub fn beacons(&self) -> &HashSet<Point3> {
        &self.beacons
    }

    /// All registered scanner origins.
    pub fn scanner_positions(&self) -> &HashSet<Point3> {
        &self.origins
    }

    /// Number of distinct beacons.
    pub fn beacon_count(&self) -> usize {
        self.beacons.len()
    }

    /// Number of registered scanners.
    pub fn scanner_count(&self) -> usize {
        self.origins.len()
    }

    /// Maximum pairwise Manhattan distance between scanner origins.
    ///
    /// `None` with fewer than two registered scanners.
    pub fn max_scanner_separation(&self) -> Option<i32> {
        let origins: Vec<&Point3> = self.origins.iter().collect();
        let mut best: Option<i32> = None;
        for (i, a) in origins.iter().enumerate() {
            for b in &origins[i + 1..] {
                let d = a.manhattan_distance(b);
                best = Some(best.map_or(d, |m| m.max(d)));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(points: &[(i32, i32, i32)]) -> BeaconScan {
        points
            .iter()
            .map(|&(x, y, z)| Point3::new(x, y, z))
            .collect()
    }

    #[test]
    fn test_seeded_map() {
        let map = BeaconMap::seeded(scan(&[(1, 2, 3), (4, 5, 6)]));
        assert_eq!(map.beacon_count(), 2);
        assert_eq!(map.scanner_count(), 1);
        assert!(map.scanner_positions().contains(&Point3::ORIGIN));
        assert_eq!(map.max_scanner_separation(), None);
    }

    #[test]
    fn test_merge_grows_monotonically() {
        let mut map = BeaconMap::seeded(scan(&[(0, 0, 0), (1, 1, 1)]));

        map.merge(ScanPlacement {
            origin: Point3::new(10, 0, 0),
            beacons: HashSet::from([Point3::new(1, 1, 1), Point3::new(2, 2, 2)]),
            overlap: 1,
        });
        assert_eq!(map.beacon_count(), 3);
        assert_eq!(map.scanner_count(), 2);

        // Re-merging a subset never shrinks either set.
        map.merge(ScanPlacement {
            origin: Point3::new(10, 0, 0),
            beacons: HashSet::from([Point3::new(2, 2, 2)]),
            overlap: 1,
        });
        assert_eq!(map.beacon_count(), 3);
        assert_eq!(map.scanner_count(), 2);
    }

    #[test]
    fn test_max_scanner_separation() {
        let mut map = BeaconMap::seeded(scan(&[(0, 0, 0)]));
        map.merge(ScanPlacement {
            origin: Point3::new(3, -4, 5),
            beacons: HashSet::new(),
            overlap: 0,
        });
        map.merge(ScanPlacement {
            origin: Point3::new(-1, 0, 0),
            beacons: HashSet::new(),
            overlap: 0,
        });
        // (3,-4,5) to (-1,0,0) is the farthest pair.
        assert_eq!(map.max_scanner_separation(), Some(13));
    }
}
