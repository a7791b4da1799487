//! Mapping from coordinates to bin indices.
//!
//! - [`AxisBinner`] - Maps values of one axis to bins and back
//! - [`Binner`] - Maps whole coordinate tuples to bin tuples

use crate::config::DimensionSpec;

// ============================================================================
// AxisBinner
// ============================================================================

/// Equal-width binning of a single axis over the half-open range `[low, high)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBinner {
    low: f64,
    high: f64,
    /// `(high - low) / n_bins`.
    bin_width: f64,
    n_bins: usize,
}

impl AxisBinner {
    /// Create a binner for a validated axis specification.
    pub fn new(spec: &DimensionSpec) -> Self {
        Self {
            low: spec.low,
            high: spec.high,
            bin_width: spec.bin_width(),
            n_bins: spec.bin_count,
        }
    }

    /// Whether `value` lies in `[low, high)`. NaN never does.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value < self.high
    }

    /// Map a value to its bin, or `None` if it is out of range.
    #[inline]
    pub fn value_to_bin(&self, value: f64) -> Option<usize> {
        if !self.contains(value) {
            return None;
        }
        let bin = ((value - self.low) / self.bin_width).floor() as usize;
        // A value just below `high` can round up to `n_bins`
        Some(bin.min(self.n_bins - 1))
    }

    /// Midpoint of a bin.
    #[inline]
    pub fn bin_to_midpoint(&self, bin: usize) -> f64 {
        self.low + ((bin as f64 + 0.5) * (self.high - self.low)) / self.n_bins as f64
    }
}

// ============================================================================
// Binner
// ============================================================================

/// Maps coordinate tuples to bin tuples, one [`AxisBinner`] per dimension.
#[derive(Clone, Debug)]
pub struct Binner {
    axes: Box<[AxisBinner]>,
}

impl Binner {
    /// Create a binner for all axes of a configuration.
    pub fn new(dimensions: &[DimensionSpec]) -> Self {
        Self {
            axes: dimensions.iter().map(AxisBinner::new).collect(),
        }
    }

    /// Number of dimensions.
    #[inline]
    pub fn num_dims(&self) -> usize {
        self.axes.len()
    }

    /// Per-axis binners.
    #[inline]
    pub fn axes(&self) -> &[AxisBinner] {
        &self.axes
    }

    /// Compute the bin tuple of `values` into `pos`.
    ///
    /// Returns `false` (leaving `pos` unspecified) if any coordinate is out of
    /// range. Both slices must have one entry per dimension.
    pub fn bin_tuple(&self, values: &[f64], pos: &mut [usize]) -> bool {
        debug_assert_eq!(values.len(), self.axes.len());
        debug_assert_eq!(pos.len(), self.axes.len());

        for ((axis, &value), slot) in self.axes.iter().zip(values).zip(pos.iter_mut()) {
            match axis.value_to_bin(value) {
                Some(bin) => *slot = bin,
                None => return false,
            }
        }
        true
    }

}
