//! Alignment configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the brute-force scan aligner.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AlignerConfig {
    /// Minimum number of beacons a candidate alignment must share with the
    /// global set before it is accepted.
    ///
    /// 12 shared beacons make an accidental match statistically impossible
    /// for exact integer coordinates at realistic scan sizes.
    #[serde(default = "default_min_overlap")]
    pub min_overlap: usize,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            min_overlap: default_min_overlap(),
        }
    }
}

fn default_min_overlap() -> usize {
    12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_overlap_threshold() {
        assert_eq!(AlignerConfig::default().min_overlap, 12);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config: AlignerConfig = toml::from_str("").unwrap();
        assert_eq!(config.min_overlap, 12);
    }
}
