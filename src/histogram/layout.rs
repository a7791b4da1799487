//! Stride layout of the flattened histogram array.

use crate::config::{ConfigError, DimensionSpec};

// ============================================================================
// BinLayout
// ============================================================================

/// Describes how a multi-dimensional bin tuple maps into a flat array.
///
/// Dimension 0 varies fastest:
/// ```text
/// index(i_0, ..., i_{D-1}) = Σ i_d * stride_d
/// stride_0 = 1, stride_d = stride_{d-1} * bin_count_{d-1}
/// ```
///
/// The product of all bin counts is checked for overflow on construction,
/// so every in-bounds tuple has a representable linear index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinLayout {
    /// Number of bins per dimension.
    bin_counts: Box<[usize]>,

    /// `strides[d]` = distance in the flat array between neighbours along `d`.
    strides: Box<[usize]>,

    /// Total bins across all dimensions (product of `bin_counts`).
    total_bins: usize,
}

impl BinLayout {
    /// Create a layout from axis specifications.
    pub fn new(dimensions: &[DimensionSpec]) -> Result<Self, ConfigError> {
        let bin_counts: Vec<usize> = dimensions.iter().map(|d| d.bin_count).collect();
        Self::from_bin_counts(&bin_counts)
    }

    /// Create a layout from raw bin counts.
    pub fn from_bin_counts(bin_counts: &[usize]) -> Result<Self, ConfigError> {
        let mut strides = Vec::with_capacity(bin_counts.len());

        let mut stride = 1usize;
        for &count in bin_counts {
            strides.push(stride);
            stride = stride
                .checked_mul(count)
                .filter(|&total| isize::try_from(total).is_ok())
                .ok_or_else(|| ConfigError::TooManyBins {
                    bin_counts: bin_counts.to_vec(),
                })?;
        }

        Ok(Self {
            bin_counts: bin_counts.into(),
            strides: strides.into_boxed_slice(),
            total_bins: stride,
        })
    }

    /// Number of dimensions.
    #[inline]
    pub fn num_dims(&self) -> usize {
        self.bin_counts.len()
    }

    /// Total number of bins.
    #[inline]
    pub fn total_bins(&self) -> usize {
        self.total_bins
    }

    /// Bins per dimension.
    #[inline]
    pub fn bin_counts(&self) -> &[usize] {
        &self.bin_counts
    }

    /// Per-dimension strides into the flat array.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Whether `pos` addresses a bin of this layout.
    #[inline]
    pub fn contains(&self, pos: &[usize]) -> bool {
        pos.len() == self.bin_counts.len()
            && pos.iter().zip(self.bin_counts.iter()).all(|(&p, &n)| p < n)
    }
}
