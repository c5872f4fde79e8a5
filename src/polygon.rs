//! Self-intersections of closed polygons.
//!
//! A polygon's edges always meet their neighbors in the edge cycle, at the
//! shared vertex. Those meetings are not self-intersections, so this module
//! runs the ordinary sweep with a filter that rejects them.

use crate::{
    config::SweepConfig,
    geom::Point,
    segments::{SegIdx, Segments},
    sweep::{AcceptIntersection, Sweeper},
    trace::{NoTrace, Trace},
};

/// Are edges `a` and `b` neighbors in a cycle of `edge_count` edges?
///
/// Edge `i` goes from vertex `i` to vertex `i + 1`, so consecutive edges are
/// adjacent, and so are the first and the last.
pub fn is_adjacent(a: SegIdx, b: SegIdx, edge_count: usize) -> bool {
    let diff = a.0.abs_diff(b.0);
    diff == 1 || diff + 1 == edge_count
}

/// Accepts intersections between polygon edges that don't share a vertex.
///
/// This assumes that the segments were built with
/// [`Segments::from_closed_cycle`], so that segment indices are edge indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NonAdjacentEdges {
    edge_count: usize,
}

impl NonAdjacentEdges {
    /// A filter for a polygon with `edge_count` edges.
    pub fn new(edge_count: usize) -> Self {
        Self { edge_count }
    }
}

impl AcceptIntersection for NonAdjacentEdges {
    fn accept(&self, a: SegIdx, b: SegIdx) -> bool {
        !is_adjacent(a, b, self.edge_count)
    }
}

/// Finds all the points where a closed polygon crosses or touches itself.
///
/// The polygon is given by its vertices; there's an edge between each
/// consecutive pair, and one from the last vertex back to the first.
/// Polygons with fewer than three vertices have no self-intersections.
///
/// The returned points are distinct (up to the tolerance) and are in the
/// order the sweep found them.
pub fn self_intersections<P: Into<Point>>(
    vertices: impl IntoIterator<Item = P>,
    config: SweepConfig,
) -> Vec<Point> {
    self_intersections_with_trace(vertices, config, NoTrace)
}

/// Like [`self_intersections`], but reports what the sweep is doing to `trace`.
pub fn self_intersections_with_trace<P: Into<Point>, T: Trace>(
    vertices: impl IntoIterator<Item = P>,
    config: SweepConfig,
    trace: T,
) -> Vec<Point> {
    let vertices: Vec<Point> = vertices.into_iter().map(Into::into).collect();
    if vertices.len() < 3 {
        return Vec::new();
    }

    let segs: Segments = Segments::from_closed_cycle(vertices);
    let mut sweeper = Sweeper::new(&segs, config)
        .with_trace(trace)
        .with_filter(NonAdjacentEdges::new(segs.len()));
    sweeper.run();
    sweeper.into_accepted()
}
