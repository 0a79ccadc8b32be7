use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

/// Thresholds deciding whether a query shares contiguous homology with a reference.
#[derive(Clone, PartialEq, Debug, Dissolve, Getters)]
pub struct Config {
    // Minimum number of alignments between the query and the reference
    min_hits: usize,
    // Merged runs / alignments must be strictly above this value
    min_merge_ratio: f64,
    // Aligned reference basepairs / reference length must be at least this value
    min_reference_fraction: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_hits: 4,
            min_merge_ratio: 0.75,
            min_reference_fraction: 0.03,
        }
    }
}

impl Config {
    pub fn new(
        min_hits: usize,
        min_merge_ratio: f64,
        min_reference_fraction: f64,
    ) -> Result<Self> {
        let mut config = Self::default();
        config
            .set_min_hits(min_hits)?
            .set_min_merge_ratio(min_merge_ratio)?
            .set_min_reference_fraction(min_reference_fraction)?;
        Ok(config)
    }

    pub fn set_min_hits(&mut self, min_hits: usize) -> Result<&mut Self> {
        ensure!(min_hits > 0, "Minimum number of hits must be positive");
        self.min_hits = min_hits;
        Ok(self)
    }

    pub fn set_min_merge_ratio(&mut self, min_merge_ratio: f64) -> Result<&mut Self> {
        ensure!(
            (0.0..=1.0).contains(&min_merge_ratio),
            "Minimum merge ratio must be within [0, 1], got {}",
            min_merge_ratio
        );
        self.min_merge_ratio = min_merge_ratio;
        Ok(self)
    }

    pub fn set_min_reference_fraction(&mut self, min_reference_fraction: f64) -> Result<&mut Self> {
        ensure!(
            (0.0..=1.0).contains(&min_reference_fraction),
            "Minimum reference fraction must be within [0, 1], got {}",
            min_reference_fraction
        );
        self.min_reference_fraction = min_reference_fraction;
        Ok(self)
    }

    /// Check both thresholds. The ratio comparison is strict, the fraction comparison is not.
    pub fn accepts(&self, merge_ratio: f64, reference_fraction: f64) -> bool {
        merge_ratio > self.min_merge_ratio && reference_fraction >= self.min_reference_fraction
    }
}
