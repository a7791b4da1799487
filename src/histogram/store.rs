//! Counter storage.

use ndarray::{ArrayD, IxDyn, ShapeBuilder};

use super::BinLayout;

/// Contiguous bin counters addressed by bin tuples.
///
/// All counters live in one zero-initialised, column-major `ndarray`
/// allocation sized once from the [`BinLayout`], so its memory order is the
/// layout's stride order. Callers only ever see bin tuples.
#[derive(Debug, Clone)]
pub struct CountArray {
    layout: BinLayout,
    counts: ArrayD<u64>,
}

impl CountArray {
    /// Allocate a zero-filled array for `layout`.
    pub fn new(layout: BinLayout) -> Self {
        let counts = ArrayD::zeros(IxDyn(layout.bin_counts()).f());
        debug_assert!(
            counts
                .strides()
                .iter()
                .zip(layout.strides())
                .all(|(&s, &stride)| s as usize == stride),
            "array strides {:?} differ from layout strides {:?}",
            counts.strides(),
            layout.strides()
        );
        Self { layout, counts }
    }

    /// The layout addressing this array.
    #[inline]
    pub fn layout(&self) -> &BinLayout {
        &self.layout
    }

    /// Count stored for a bin tuple.
    ///
    /// Panics if `pos` is outside the layout.
    #[inline]
    pub fn get(&self, pos: &[usize]) -> u64 {
        debug_assert!(self.layout.contains(pos), "bin {:?} out of range", pos);
        self.counts[pos]
    }

    /// Add one to a bin and return the new count.
    #[inline]
    pub fn increment(&mut self, pos: &[usize]) -> u64 {
        debug_assert!(self.layout.contains(pos), "bin {:?} out of range", pos);
        let cell = &mut self.counts[pos];
        *cell += 1;
        *cell
    }

    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        self.counts.sum()
    }

    /// Largest counter, 0 for an all-empty array.
    pub fn max(&self) -> u64 {
        self.counts.fold(0, |max, &count| max.max(count))
    }
}
