//! Per-dimension bounding box of occupied bins.
//!
//! - [`OccupiedRange`] - Tracks min/max bin index that received a count
//! - [`Window`] - Inclusive per-dimension bin range used to restrict output

use std::fmt;

// ============================================================================
// OccupiedRange
// ============================================================================

/// Tightest box of bins that ever received an increment.
///
/// A dimension that was never recorded stays `None` ("nothing seen yet").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupiedRange {
    pub(super) bounds: Box<[Option<(usize, usize)>]>,
}

impl OccupiedRange {
    /// Create a tracker with nothing seen in any of `num_dims` dimensions.
    pub fn new(num_dims: usize) -> Self {
        Self {
            bounds: vec![None; num_dims].into_boxed_slice(),
        }
    }

    /// Widen the box to include `pos`.
    #[inline]
    pub fn record(&mut self, pos: &[usize]) {
        debug_assert_eq!(pos.len(), self.bounds.len());
        for (bound, &p) in self.bounds.iter_mut().zip(pos) {
            *bound = Some(match *bound {
                Some((lo, hi)) => (lo.min(p), hi.max(p)),
                None => (p, p),
            });
        }
    }

    /// Output window: the occupied box grown by one bin on each side, clipped
    /// to the axis.
    ///
    /// A dimension with nothing recorded yields its full axis.
    pub fn padded(&self, bin_counts: &[usize]) -> Window {
        debug_assert_eq!(bin_counts.len(), self.bounds.len());
        let (lower, upper) = self
            .bounds
            .iter()
            .zip(bin_counts)
            .map(|(bound, &n)| match *bound {
                Some((lo, hi)) => (lo.saturating_sub(1), (hi + 1).min(n - 1)),
                None => (0, n - 1),
            })
            .unzip::<_, _, Vec<_>, Vec<_>>();

        Window {
            lower: lower.into_boxed_slice(),
            upper: upper.into_boxed_slice(),
        }
    }
}

// ============================================================================
// Window
// ============================================================================

/// Inclusive bin range `[lower[d], upper[d]]` per dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    lower: Box<[usize]>,
    upper: Box<[usize]>,
}

impl Window {
    /// The whole index space of an array with the given bin counts.
    pub fn full(bin_counts: &[usize]) -> Self {
        Self {
            lower: vec![0; bin_counts.len()].into_boxed_slice(),
            upper: bin_counts.iter().map(|&n| n - 1).collect(),
        }
    }

    /// Inclusive lower bin per dimension.
    #[inline]
    pub fn lower(&self) -> &[usize] {
        &self.lower
    }

    /// Inclusive upper bin per dimension.
    #[inline]
    pub fn upper(&self) -> &[usize] {
        &self.upper
    }

    /// Exclusive upper bound per dimension.
    pub fn upper_exclusive(&self) -> Vec<usize> {
        self.upper.iter().map(|&u| u + 1).collect()
    }

    /// Number of bin tuples inside the window.
    pub fn num_bins(&self) -> usize {
        self.lower
            .iter()
            .zip(self.upper.iter())
            .map(|(&lo, &hi)| hi - lo + 1)
            .product()
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (dim, (lo, hi)) in self.lower.iter().zip(self.upper.iter()).enumerate() {
            if dim > 0 {
                write!(f, " x ")?;
            }
            write!(f, "[{}, {}]", lo, hi)?;
        }
        Ok(())
    }
}
