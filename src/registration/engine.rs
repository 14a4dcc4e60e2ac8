//! Worklist-driven registration engine.

use std::collections::VecDeque;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::BeaconMap;
use crate::core::BeaconScan;
use crate::matching::{BruteForceAligner, ScanAligner};

use super::error::RegistrationError;

/// Configuration for the registration worklist.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of complete zero-success passes over the worklist tolerated
    /// before registration aborts with [`RegistrationError::Stalled`].
    ///
    /// 0 disables stall detection: a scan set whose overlap graph is
    /// disconnected from scanner 0 then retries forever.
    #[serde(default = "default_stall_limit")]
    pub stall_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            stall_limit: default_stall_limit(),
        }
    }
}

fn default_stall_limit() -> usize {
    1
}

/// Outcome of a completed registration run.
#[derive(Clone, Debug)]
pub struct RegistrationReport {
    /// The fully merged global map.
    pub map: BeaconMap,
    /// Total alignment attempts, including failed ones.
    pub attempts: usize,
    /// How many times a scan was requeued after a failed attempt.
    pub requeues: usize,
}

/// Drives a FIFO worklist of unregistered scans against a growing global
/// map.
///
/// Scanner 0 defines the global frame: its raw readings seed the map and
/// its origin is fixed at (0, 0, 0). Every other scan starts pending, in
/// input order. A scan that fails to align is requeued at the tail and
/// retried once the map has grown from other successes; a scan aligns at
/// most once.
pub struct RegistrationEngine<A: ScanAligner = BruteForceAligner> {
    aligner: A,
    config: EngineConfig,
}

impl RegistrationEngine<BruteForceAligner> {
    /// Engine with the default brute-force aligner and default config.
    pub fn with_defaults() -> Self {
        Self::new(BruteForceAligner::with_defaults(), EngineConfig::default())
    }
}

impl<A: ScanAligner> RegistrationEngine<A> {
    /// Create an engine from an aligner and worklist configuration.
    pub fn new(aligner: A, config: EngineConfig) -> Self {
        Self { aligner, config }
    }

    /// Get configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Register every scan into a single global map.
    ///
    /// Consumes the scans; the first one seeds the map. Terminates when
    /// the worklist drains, or fails with [`RegistrationError::Stalled`]
    /// once `stall_limit` full passes complete without a registration.
    pub fn run(&self, scans: Vec<BeaconScan>) -> Result<RegistrationReport, RegistrationError> {
        let mut scans = scans.into_iter();
        let seed = scans.next().ok_or(RegistrationError::NoScans)?;

        info!(
            "seeding global frame with scanner 0 ({} beacons), aligner: {}",
            seed.len(),
            self.aligner.name()
        );

        let mut map = BeaconMap::seeded(seed);
        let mut queue: VecDeque<BeaconScan> = scans.collect();

        let mut attempts = 0usize;
        let mut requeues = 0usize;
        let mut consecutive_failures = 0usize;

        while let Some(scan) = queue.pop_front() {
            attempts += 1;

            match self.aligner.try_align(map.beacons(), &scan) {
                Some(placement) => {
                    info!(
                        "registered scanner at ({}, {}, {}) with {} shared beacons, {} scans pending",
                        placement.origin.x,
                        placement.origin.y,
                        placement.origin.z,
                        placement.overlap,
                        queue.len()
                    );
                    map.merge(placement);
                    consecutive_failures = 0;
                }
                None => {
                    // Unregistered scans, counting the one just popped.
                    let unregistered = queue.len() + 1;
                    consecutive_failures += 1;

                    if self.config.stall_limit > 0
                        && consecutive_failures >= self.config.stall_limit * unregistered
                    {
                        warn!(
                            "registration stalled after {} consecutive failures, {} scans unalignable",
                            consecutive_failures, unregistered
                        );
                        return Err(RegistrationError::Stalled {
                            registered: map.scanner_count(),
                            remaining: unregistered,
                        });
                    }

                    debug!(
                        "no alignment for scan with {} beacons, requeueing",
                        scan.len()
                    );
                    queue.push_back(scan);
                    requeues += 1;
                }
            }
        }

        info!(
            "registration complete: {} scanners, {} distinct beacons, {} attempts",
            map.scanner_count(),
            map.beacon_count(),
            attempts
        );

        Ok(RegistrationReport {
            map,
            attempts,
            requeues,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Point3, Rotation};

    fn spread_points(n: usize) -> Vec<Point3> {
        (0..n as i32)
            .map(|i| Point3::new(137 * i - 55, 61 * i * i + 3, -89 * i + 400))
            .collect()
    }

    /// Build a scan that observes `beacons` from `origin` under `rotation`.
    fn scan_from(beacons: &[Point3], origin: Point3, rotation: &Rotation) -> BeaconScan {
        beacons
            .iter()
            .map(|g| rotation.inverse().apply(*g - origin))
            .collect()
    }

    #[test]
    fn test_single_scan_degenerate() {
        let scan: BeaconScan = spread_points(5).into_iter().collect();
        let expected = scan.points().clone();

        let report = RegistrationEngine::with_defaults().run(vec![scan]).unwrap();
        assert_eq!(*report.map.beacons(), expected);
        assert_eq!(report.map.scanner_count(), 1);
        assert!(report.map.scanner_positions().contains(&Point3::ORIGIN));
        assert_eq!(report.attempts, 0);
        assert_eq!(report.map.max_scanner_separation(), None);
    }

    #[test]
    fn test_no_scans_is_error() {
        let err = RegistrationEngine::with_defaults().run(vec![]).unwrap_err();
        assert_eq!(err, RegistrationError::NoScans);
    }

    #[test]
    fn test_two_overlapping_scans() {
        let world = spread_points(28);
        let origin = Point3::new(900, -450, 120);
        let rotation = &Rotation::CATALOG[7];

        // Scan 0 sees the first 16 beacons raw; scan 1 sees the last 16
        // (12 shared) from a rotated, shifted frame.
        let scan0: BeaconScan = world[..16].iter().copied().collect();
        let scan1 = scan_from(&world[4..20], origin, rotation);

        let report = RegistrationEngine::with_defaults()
            .run(vec![scan0, scan1])
            .unwrap();
        assert_eq!(report.map.beacon_count(), 20);
        assert_eq!(report.map.scanner_count(), 2);
        assert!(report.map.scanner_positions().contains(&origin));
        assert_eq!(
            report.map.max_scanner_separation(),
            Some(Point3::ORIGIN.manhattan_distance(&origin))
        );
    }

    #[test]
    fn test_out_of_order_registration_requeues() {
        let world = spread_points(24);
        let far = Point3::new(-1200, 777, -310);
        let farther = Point3::new(2500, -1800, 950);

        let scan0: BeaconScan = world[..16].iter().copied().collect();
        // Shares only 8 beacons with scan 0; alignable (12 shared) once the
        // middle scan has merged.
        let scan_far = scan_from(&world[8..24], farther, &Rotation::CATALOG[21]);
        let scan_mid = scan_from(&world[4..20], far, &Rotation::CATALOG[9]);

        let report = RegistrationEngine::with_defaults()
            .run(vec![scan0, scan_far, scan_mid])
            .unwrap();
        assert_eq!(report.map.scanner_count(), 3);
        assert!(report.requeues >= 1);
        assert!(report.map.scanner_positions().contains(&far));
        assert!(report.map.scanner_positions().contains(&farther));
    }

    #[test]
    fn test_disconnected_world_stalls() {
        let world = spread_points(40);
        let scan0: BeaconScan = world[..16].iter().copied().collect();
        // Far window, zero shared beacons.
        let island: BeaconScan = world[24..40].iter().copied().collect();

        let err = RegistrationEngine::with_defaults()
            .run(vec![scan0, island])
            .unwrap_err();
        assert_eq!(
            err,
            RegistrationError::Stalled {
                registered: 1,
                remaining: 1,
            }
        );
    }
}
