//! The sweep line itself: the segments it currently crosses, in vertical order.

use std::cmp::Ordering;

use crate::{
    geom::Point,
    segments::{SegIdx, Segments},
};

/// The segments immediately below and above some position in the sweep line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbors {
    /// The segment just below (at the previous index), if any.
    pub below: Option<SegIdx>,
    /// The segment just above (at the next index), if any.
    pub above: Option<SegIdx>,
}

/// The ordered collection of segments crossing the sweep line.
///
/// Segments are ordered by increasing `y` just after the current sweep point
/// (see [`Segment::cmp_at`](crate::Segment::cmp_at)), so index 0 is the
/// segment with the smallest `y`. The sweep line doesn't
/// track its own position: the positions come from the caller, and keeping
/// the order valid as the sweep advances is the sweeper's job.
///
/// This is a plain vector with linear-time updates. What matters is the
/// order, not the lookup cost.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SweepStatus {
    order: Vec<SegIdx>,
}

impl SweepStatus {
    /// Creates an empty sweep line.
    pub fn new() -> Self {
        Self::default()
    }

    /// The segments in the sweep line, in increasing `y` order.
    pub fn as_slice(&self) -> &[SegIdx] {
        &self.order
    }

    /// The number of segments in the sweep line.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Is the sweep line empty?
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The segment at position `pos`, if there is one.
    pub fn get(&self, pos: usize) -> Option<SegIdx> {
        self.order.get(pos).copied()
    }

    /// The position of `seg`, if it's in the sweep line.
    pub fn position(&self, seg: SegIdx) -> Option<usize> {
        self.order.iter().position(|&s| s == seg)
    }

    /// The segments just below and above position `pos`.
    pub fn neighbors(&self, pos: usize) -> Neighbors {
        Neighbors {
            below: pos.checked_sub(1).and_then(|p| self.get(p)),
            above: self.get(pos + 1),
        }
    }

    /// Inserts `seg` into the sweep line at the sweep point `at`, returning its position.
    ///
    /// The new segment goes before the first segment that is strictly bigger
    /// than it just after `at`, so it ends up after any segments that it ties with.
    pub fn insert<A>(
        &mut self,
        seg: SegIdx,
        at: Point,
        segments: &Segments<A>,
        eps: f64,
    ) -> usize {
        let new_seg = &segments[seg];
        let pos = self
            .order
            .iter()
            .position(|&other| segments[other].cmp_at(new_seg, &at, eps) == Ordering::Greater)
            .unwrap_or(self.order.len());
        self.order.insert(pos, seg);
        pos
    }

    /// Removes `seg` from the sweep line, returning its former neighbors.
    ///
    /// Returns `None` if `seg` wasn't in the sweep line.
    pub fn remove(&mut self, seg: SegIdx) -> Option<Neighbors> {
        let pos = self.position(seg)?;
        let neighbors = self.neighbors(pos);
        self.order.remove(pos);
        Some(neighbors)
    }

    /// Exchanges the positions of `a` and `b`, whether or not they're adjacent.
    ///
    /// Returns `false` (and does nothing) if either one is missing.
    pub fn swap(&mut self, a: SegIdx, b: SegIdx) -> bool {
        match (self.position(a), self.position(b)) {
            (Some(i), Some(j)) => {
                self.order.swap(i, j);
                true
            }
            _ => false,
        }
    }

    /// Checks whether the order is valid just after `x`.
    ///
    /// Returns the first pair of adjacent segments that is out of order.
    pub fn find_invalid_order<A>(
        &self,
        x: f64,
        segments: &Segments<A>,
        eps: f64,
    ) -> Option<(SegIdx, SegIdx)> {
        self.order.windows(2).find_map(|pair| {
            let (lower, upper) = (pair[0], pair[1]);
            (segments[lower].cmp_after(&segments[upper], x, eps) == Ordering::Greater)
                .then_some((lower, upper))
        })
    }
}
