//! Test utilities for registration integration tests.
//!
//! Builds synthetic worlds: a global beacon field carved into overlapping
//! windows, each window re-expressed in a scrambled scanner frame.

#![allow(dead_code)]

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tara_map::{BeaconScan, Point3, Rotation};

/// A synthetic multi-scanner world with known ground truth.
pub struct SyntheticWorld {
    /// Scans in registration input order; scan 0 is raw (global frame).
    pub scans: Vec<BeaconScan>,
    /// Every beacon in the global frame.
    pub beacons: HashSet<Point3>,
    /// Every scanner origin, including (0, 0, 0) for scanner 0.
    pub origins: HashSet<Point3>,
}

/// Generate `count` distinct well-spread beacons.
pub fn random_beacons(count: usize, rng: &mut StdRng) -> Vec<Point3> {
    let mut seen = HashSet::with_capacity(count);
    let mut beacons = Vec::with_capacity(count);
    while beacons.len() < count {
        let p = Point3::new(
            rng.gen_range(-2000..=2000),
            rng.gen_range(-2000..=2000),
            rng.gen_range(-2000..=2000),
        );
        if seen.insert(p) {
            beacons.push(p);
        }
    }
    beacons
}

/// Build a chain of scans over a shared beacon field.
///
/// Scan `i` observes the window `beacons[stride*i .. stride*i + visible]`,
/// so consecutive scans share `visible - stride` beacons (keep that at 12
/// or more). Scan 0 is left in the global frame; every other scan is
/// re-expressed from a random origin under a catalog rotation.
pub fn chained_world(num_scans: usize, visible: usize, stride: usize, seed: u64) -> SyntheticWorld {
    assert!(num_scans >= 1);
    assert!(visible >= stride + 12, "windows must overlap by >= 12");

    let mut rng = StdRng::seed_from_u64(seed);
    let total = stride * (num_scans - 1) + visible;
    let field = random_beacons(total, &mut rng);

    let mut scans = Vec::with_capacity(num_scans);
    let mut origins = HashSet::from([Point3::ORIGIN]);

    for i in 0..num_scans {
        let window = &field[stride * i..stride * i + visible];

        if i == 0 {
            scans.push(window.iter().copied().collect());
            continue;
        }

        let origin = Point3::new(
            rng.gen_range(-3000..=3000),
            rng.gen_range(-3000..=3000),
            rng.gen_range(-3000..=3000),
        );
        let rotation = Rotation::CATALOG[rng.gen_range(0..Rotation::CATALOG.len())];
        origins.insert(origin);

        // Local reading p satisfies rotation(p) + origin == global beacon.
        let scan: BeaconScan = window
            .iter()
            .map(|g| rotation.inverse().apply(*g - origin))
            .collect();
        scans.push(scan);
    }

    SyntheticWorld {
        scans,
        beacons: field.into_iter().collect(),
        origins,
    }
}
