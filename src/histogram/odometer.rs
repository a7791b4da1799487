//! Odometer-style enumeration of bin tuples.
//!
//! An [`Odometer`] holds a current position inside per-dimension bounds and
//! advances it like a mechanical counter: the fastest dimension is
//! incremented, and on reaching its bound it resets to its lower bound and
//! carries into the next dimension.
//!
//! Two carry orders are used by the output formats and both are observable:
//! - [`CarryOrder::FirstFastest`]: dimension 0 fastest (flat memory order,
//!   raw image rows)
//! - [`CarryOrder::LastFastest`]: dimension `D-1` fastest (text blocks)

use super::Window;

/// Which dimension an [`Odometer`] increments first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarryOrder {
    /// Dimension 0 changes fastest.
    FirstFastest,
    /// The last dimension changes fastest.
    LastFastest,
}

/// Mutable position over the box `lower[d] <= pos[d] < upper[d]`.
///
/// The sequence is not restartable: once [`advance`](Self::advance) reports
/// exhaustion the position has wrapped back to `lower` and a new odometer
/// should be created for another pass.
#[derive(Debug, Clone)]
pub struct Odometer {
    lower: Box<[usize]>,
    /// Exclusive upper bound per dimension.
    upper: Box<[usize]>,
    pos: Box<[usize]>,
    order: CarryOrder,
    /// Dimensions that rolled over on the last advance.
    wrapped: usize,
}

impl Odometer {
    /// Odometer over `[0, upper[d])` in dimension-0-fastest order.
    pub fn new(upper: &[usize]) -> Self {
        Self::with_bounds(&vec![0; upper.len()], upper, CarryOrder::FirstFastest)
    }

    /// Odometer over `[lower[d], upper[d])` in the given order.
    pub fn with_bounds(lower: &[usize], upper: &[usize], order: CarryOrder) -> Self {
        debug_assert_eq!(lower.len(), upper.len());
        debug_assert!(
            lower.iter().zip(upper).all(|(lo, hi)| lo < hi),
            "empty odometer bounds {:?}..{:?}",
            lower,
            upper
        );
        Self {
            lower: lower.into(),
            upper: upper.into(),
            pos: lower.into(),
            order,
            wrapped: 0,
        }
    }

    /// Odometer over an inclusive [`Window`].
    pub fn over(window: &Window, order: CarryOrder) -> Self {
        Self::with_bounds(window.lower(), &window.upper_exclusive(), order)
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> &[usize] {
        &self.pos
    }

    /// Number of dimensions that rolled over to their lower bound during the
    /// last [`advance`](Self::advance).
    ///
    /// `wrapped() >= 1` means the fastest dimension just completed a full
    /// sweep; `wrapped() == D` only happens on exhaustion.
    #[inline]
    pub fn wrapped(&self) -> usize {
        self.wrapped
    }

    /// Step to the next position.
    ///
    /// Returns `true` when the carry propagated past the slowest dimension,
    /// i.e. the sequence is exhausted.
    pub fn advance(&mut self) -> bool {
        let dims = self.pos.len();
        self.wrapped = 0;

        for step in 0..dims {
            let dim = match self.order {
                CarryOrder::FirstFastest => step,
                CarryOrder::LastFastest => dims - 1 - step,
            };

            self.pos[dim] += 1;
            if self.pos[dim] < self.upper[dim] {
                return false;
            }
            self.pos[dim] = self.lower[dim];
            self.wrapped += 1;
        }
        true
    }

    /// Consume the odometer as an iterator over all remaining positions,
    /// starting with the current one.
    pub fn positions(self) -> Positions {
        Positions {
            odometer: self,
            done: false,
        }
    }
}

/// Iterator adapter returned by [`Odometer::positions`].
#[derive(Debug, Clone)]
pub struct Positions {
    odometer: Odometer,
    done: bool,
}

impl Iterator for Positions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.odometer.position().to_vec();
        self.done = self.odometer.advance();
        Some(current)
    }
}
