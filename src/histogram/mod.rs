//! The histogram engine.
//!
//! A [`Histogram`] owns the counters for one run. During import every tuple
//! goes through [`Histogram::insert`], which bins it, increments the matching
//! counter and widens the occupied range. During output the histogram is
//! read-only.
//!
//! # Key Types
//!
//! - [`BinLayout`]: Strides of the flattened array
//! - [`CountArray`]: The counters, addressed by bin tuple
//! - [`Binner`] / [`AxisBinner`]: Coordinate to bin mapping
//! - [`OccupiedRange`] / [`Window`]: Bounding box of occupied bins
//! - [`Odometer`]: Ordered enumeration of bin tuples
//! - [`SampleStats`]: Diagnostic counters

mod binning;
mod layout;
mod occupied;
mod odometer;
mod store;

pub use binning::{AxisBinner, Binner};
pub use layout::BinLayout;
pub use occupied::{OccupiedRange, Window};
pub use odometer::{CarryOrder, Odometer, Positions};
pub use store::CountArray;

use crate::config::{ConfigError, HistogramConfig};

// =============================================================================
// SampleStats
// =============================================================================

/// Diagnostic counters collected during import.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleStats {
    /// Tuples read, in range or not.
    pub read: u64,
    /// Tuples dropped because a coordinate was out of range.
    pub rejected: u64,
    /// Raw `(min, max)` of every value read, per dimension.
    observed: Box<[(f64, f64)]>,
}

impl SampleStats {
    fn new(num_dims: usize) -> Self {
        Self {
            read: 0,
            rejected: 0,
            observed: vec![(f64::INFINITY, f64::NEG_INFINITY); num_dims].into_boxed_slice(),
        }
    }

    /// Tuples that were counted in the histogram.
    #[inline]
    pub fn accepted(&self) -> u64 {
        self.read - self.rejected
    }

    /// `(min, max)` of all values read per dimension, including rejected ones.
    ///
    /// Before anything was read this is `(+inf, -inf)`.
    #[inline]
    pub fn observed(&self) -> &[(f64, f64)] {
        &self.observed
    }

    fn observe(&mut self, values: &[f64]) {
        for ((min, max), &v) in self.observed.iter_mut().zip(values) {
            *min = min.min(v);
            *max = max.max(v);
        }
    }
}

// =============================================================================
// Histogram
// =============================================================================

/// Outcome of [`Histogram::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insert {
    /// The tuple was counted.
    Accepted,
    /// A coordinate was outside `[low, high)`; only the statistics changed.
    Rejected,
}

/// N-dimensional histogram of equal-width bins.
#[derive(Debug, Clone)]
pub struct Histogram {
    binner: Binner,
    counts: CountArray,
    occupied: OccupiedRange,
    stats: SampleStats,
    /// Scratch bin tuple reused by `insert`.
    pos: Vec<usize>,
}

impl Histogram {
    /// Allocate an empty histogram for a configuration.
    ///
    /// The configuration is validated again, since its fields are public.
    pub fn new(config: &HistogramConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = BinLayout::new(&config.dimensions)?;
        let num_dims = layout.num_dims();

        Ok(Self {
            binner: Binner::new(&config.dimensions),
            counts: CountArray::new(layout),
            occupied: OccupiedRange::new(num_dims),
            stats: SampleStats::new(num_dims),
            pos: vec![0; num_dims],
        })
    }

    /// Count one tuple.
    ///
    /// `values` must hold one coordinate per dimension. Out-of-range tuples
    /// are tallied in [`SampleStats::rejected`] and otherwise ignored.
    pub fn insert(&mut self, values: &[f64]) -> Insert {
        debug_assert_eq!(values.len(), self.num_dims());

        self.stats.read += 1;
        self.stats.observe(values);

        if !self.binner.bin_tuple(values, &mut self.pos) {
            self.stats.rejected += 1;
            return Insert::Rejected;
        }

        self.counts.increment(&self.pos);
        self.occupied.record(&self.pos);
        Insert::Accepted
    }

    /// Number of dimensions.
    #[inline]
    pub fn num_dims(&self) -> usize {
        self.binner.num_dims()
    }

    /// Coordinate binning.
    #[inline]
    pub fn binner(&self) -> &Binner {
        &self.binner
    }

    /// The counters.
    #[inline]
    pub fn counts(&self) -> &CountArray {
        &self.counts
    }

    /// Layout of the counters.
    #[inline]
    pub fn layout(&self) -> &BinLayout {
        self.counts.layout()
    }

    /// Import statistics.
    #[inline]
    pub fn stats(&self) -> &SampleStats {
        &self.stats
    }

    /// Count of a bin tuple.
    #[inline]
    pub fn get(&self, pos: &[usize]) -> u64 {
        self.counts.get(pos)
    }

    /// Largest count.
    #[inline]
    pub fn max_count(&self) -> u64 {
        self.counts.max()
    }

    /// Region of bins to render: the padded occupied range when `trim` is
    /// set, the whole index space otherwise.
    pub fn output_window(&self, trim: bool) -> Window {
        let bin_counts = self.layout().bin_counts();
        if trim {
            self.occupied.padded(bin_counts)
        } else {
            Window::full(bin_counts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DimensionSpec;

    fn histogram(dimensions: Vec<DimensionSpec>) -> Histogram {
        let config = HistogramConfig::builder()
            .dimensions(dimensions)
            .build()
            .unwrap();
        Histogram::new(&config).unwrap()
    }

    #[test]
    fn test_one_dimensional_counts() {
        let mut hist = histogram(vec![DimensionSpec::new(0.0, 10.0, 2)]);
        for v in [1.0, 1.0, 6.0, 6.0, 6.0] {
            assert_eq!(hist.insert(&[v]), Insert::Accepted);
        }
        assert_eq!(hist.get(&[0]), 2);
        assert_eq!(hist.get(&[1]), 3);
        assert_eq!(hist.stats().accepted(), 5);
        assert_eq!(hist.max_count(), 3);
    }

    #[test]
    fn test_rejected_tuples_update_stats_only() {
        let mut hist = histogram(vec![
            DimensionSpec::new(0.0, 1.0, 2),
            DimensionSpec::new(0.0, 1.0, 2),
        ]);
        assert_eq!(hist.insert(&[0.5, 1.0]), Insert::Rejected);
        assert_eq!(hist.insert(&[-3.0, 0.2]), Insert::Rejected);
        assert_eq!(hist.insert(&[0.1, 0.9]), Insert::Accepted);

        let stats = hist.stats();
        assert_eq!(stats.read, 3);
        assert_eq!(stats.rejected, 2);
        assert_eq!(stats.accepted(), 1);
        assert_eq!(stats.observed(), &[(-3.0, 0.5), (0.2, 1.0)]);
        assert_eq!(hist.counts().total(), 1);
        assert_eq!(hist.occupied.bounds[..], [Some((0, 0)), Some((1, 1))]);
    }

    #[test]
    fn test_output_window() {
        let mut hist = histogram(vec![DimensionSpec::new(0.0, 10.0, 10)]);
        hist.insert(&[7.5]);
        assert_eq!(hist.output_window(true).lower(), &[6]);
        assert_eq!(hist.output_window(true).upper(), &[8]);
        assert_eq!(hist.output_window(false), Window::full(&[10]));
    }

    #[test]
    fn test_unvalidated_config_is_rejected() {
        let mut config = HistogramConfig::builder()
            .dimensions(vec![DimensionSpec::new(0.0, 1.0, 3)])
            .build()
            .unwrap();
        config.dimensions[0].bin_count = 0;
        assert_eq!(
            Histogram::new(&config).err(),
            Some(ConfigError::InvalidBinCount { dim: 0 })
        );

        let config = HistogramConfig {
            dimensions: vec![],
            relative: false,
            output: Default::default(),
            trim: false,
            verbosity: Default::default(),
        };
        assert!(matches!(
            Histogram::new(&config),
            Err(ConfigError::InvalidDimensionCount { got: 0, .. })
        ));
    }

    #[test]
    fn test_empty_histogram() {
        let hist = histogram(vec![DimensionSpec::new(0.0, 1.0, 3)]);
        assert_eq!(hist.max_count(), 0);
        assert_eq!(hist.stats().observed(), &[(f64::INFINITY, f64::NEG_INFINITY)]);
        assert_eq!(hist.output_window(true), Window::full(&[3]));
    }
}
