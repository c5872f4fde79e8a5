use crate::geom::{Point, Segment};

/// An index into our segment arena.
///
/// Throughout this library, we assign identities to segments, so that we may
/// consider segments as different even if they have the same start- and end-points.
///
/// This index is used to identify a segment, whose data can be retrieved by looking
/// it up in [`Segments`]. (Of course, this index-as-identifier breaks down if there are
/// multiple `Segments` in flight. Just be careful not to mix them up.)
#[derive(
    Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SegIdx(pub usize);

impl std::fmt::Debug for SegIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s_{}", self.0)
    }
}

/// An arena of line segments.
///
/// Segments are indexed by [`SegIdx`] and can be retrieved by indexing (i.e. with square brackets).
/// Each segment carries an attribute of type `A`, which the sweep never looks at.
#[derive(Debug, Clone)]
pub struct Segments<A = ()> {
    segs: Vec<Segment>,
    attrs: Vec<A>,
}

impl<A> Default for Segments<A> {
    fn default() -> Self {
        Self {
            segs: Vec::new(),
            attrs: Vec::new(),
        }
    }
}

pub(crate) fn cyclic_pairs<T>(xs: &[T]) -> impl Iterator<Item = (&T, &T)> {
    xs.windows(2)
        .map(|pair| (&pair[0], &pair[1]))
        .chain(xs.last().zip(xs.first()))
}

impl<A> Segments<A> {
    /// The number of line segments in this arena.
    pub fn len(&self) -> usize {
        self.segs.len()
    }

    /// Is this arena empty?
    pub fn is_empty(&self) -> bool {
        self.segs.is_empty()
    }

    /// Iterate over all indices that can be used to index into this arena.
    pub fn indices(&self) -> impl Iterator<Item = SegIdx> {
        (0..self.segs.len()).map(SegIdx)
    }

    /// Iterate over all segments in this arena.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segs.iter()
    }

    /// The attribute attached to the segment at `idx`.
    pub fn attr(&self, idx: SegIdx) -> &A {
        &self.attrs[idx.0]
    }

    /// Adds a segment with an attribute, returning its index.
    pub fn add_segment_with<P: Into<Point>>(&mut self, a: P, b: P, attr: A) -> SegIdx {
        self.segs.push(Segment::new(a.into(), b.into()));
        self.attrs.push(attr);
        SegIdx(self.segs.len() - 1)
    }
}

impl<A: Default> Segments<A> {
    /// Adds a segment, returning its index.
    pub fn add_segment<P: Into<Point>>(&mut self, a: P, b: P) -> SegIdx {
        self.add_segment_with(a, b, A::default())
    }

    /// Adds one segment per edge of a closed polyline.
    ///
    /// Edge `i` goes from vertex `i` to vertex `i + 1`, and the last edge goes
    /// from the last vertex back to the first. A polyline with fewer than two
    /// points adds nothing.
    pub fn add_cycle<P: Into<Point>>(&mut self, ps: impl IntoIterator<Item = P>) {
        let ps: Vec<Point> = ps.into_iter().map(|p| p.into()).collect();
        if ps.len() <= 1 {
            return;
        }

        for (p, q) in cyclic_pairs(&ps) {
            self.add_segment(*p, *q);
        }
    }

    /// Construct a segment arena from a single closed polyline.
    ///
    /// If the arena was empty (as it is here), segment indices agree with edge
    /// indices.
    pub fn from_closed_cycle<P: Into<Point>>(ps: impl IntoIterator<Item = P>) -> Self {
        let mut ret = Self::default();
        ret.add_cycle(ps);
        ret
    }
}

impl<A, P: Into<Point>> FromIterator<(P, P)> for Segments<A>
where
    A: Default,
{
    fn from_iter<T: IntoIterator<Item = (P, P)>>(iter: T) -> Self {
        let mut ret = Self::default();
        for (a, b) in iter {
            ret.add_segment(a, b);
        }
        ret
    }
}

impl<A> std::ops::Index<SegIdx> for Segments<A> {
    type Output = Segment;

    fn index(&self, index: SegIdx) -> &Self::Output {
        &self.segs[index.0]
    }
}
