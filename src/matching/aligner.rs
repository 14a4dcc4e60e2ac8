//! Brute-force scan-to-map aligner.

use std::collections::HashSet;

use crate::core::{BeaconScan, Point3, Rotation};

use super::config::AlignerConfig;
use super::traits::ScanAligner;
use super::types::ScanPlacement;

/// Exhaustive rotation and translation hypothesis testing.
///
/// For each of the 24 rotations, every pairing of a global anchor beacon
/// with a rotated scan beacon yields a candidate translation; the candidate
/// is accepted as soon as the translated scan shares at least
/// `min_overlap` beacons with the global set. No spatial indexing or
/// pruning: complexity is O(24 x |global| x |scan|) hypotheses per attempt,
/// which is adequate at the data sizes this library targets.
pub struct BruteForceAligner {
    config: AlignerConfig,
}

impl BruteForceAligner {
    /// Create an aligner with the given configuration.
    pub fn new(config: AlignerConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration (overlap threshold 12).
    pub fn with_defaults() -> Self {
        Self::new(AlignerConfig::default())
    }

    /// Get configuration.
    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    /// Count how many points of `rotated`, shifted by `delta`, are already
    /// in the global set. Membership lookups instead of building the
    /// translated set keeps the hot path allocation-free.
    fn count_overlap(rotated: &[Point3], delta: Point3, global: &HashSet<Point3>) -> usize {
        rotated
            .iter()
            .filter(|q| global.contains(&(**q + delta)))
            .count()
    }
}

impl ScanAligner for BruteForceAligner {
    fn try_align(&self, global: &HashSet<Point3>, scan: &BeaconScan) -> Option<ScanPlacement> {
        if scan.is_empty() {
            return None;
        }

        for rotation in &Rotation::CATALOG {
            let rotated = scan.rotated(rotation);

            for anchor in global {
                for point in &rotated {
                    // If this rotation is right and these two beacons
                    // coincide, the delta is the scanner's global origin.
                    let delta = *anchor - *point;
                    let overlap = Self::count_overlap(&rotated, delta, global);

                    if overlap >= self.config.min_overlap {
                        let beacons = rotated.iter().map(|q| *q + delta).collect();
                        return Some(ScanPlacement {
                            origin: delta,
                            beacons,
                            overlap,
                        });
                    }
                }
            }
        }

        None
    }

    fn name(&self) -> &str {
        "brute-force"
    }
}
