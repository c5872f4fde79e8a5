//! The event-processing core of the sweep.

use std::cmp::Ordering;

use arrayvec::ArrayVec;

use crate::{
    config::SweepConfig,
    geom::Point,
    segments::{SegIdx, Segments},
    trace::{NoTrace, Trace},
};

use super::{
    event::{Event, EventKind},
    queue::{EventQueue, Scheduled},
    status::SweepStatus,
};

/// The intersection events discovered while processing a single event.
///
/// There are at most two: a segment that enters the sweep line gets compared
/// to its two new neighbors, and so do the two segments that swap places at
/// a crossing.
pub type Candidates = ArrayVec<Event, 2>;

/// Decides which intersections a sweep reports.
///
/// The sweep finds the same intersections no matter what this says, and it
/// maintains the sweep line the same way. The only difference is in which
/// of them end up in [`Sweeper::accepted`].
pub trait AcceptIntersection {
    /// Should the intersection between `a` and `b` be reported?
    fn accept(&self, a: SegIdx, b: SegIdx) -> bool;
}

/// Accepts all intersections.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl AcceptIntersection for AcceptAll {
    fn accept(&self, _a: SegIdx, _b: SegIdx) -> bool {
        true
    }
}

impl<F: Fn(SegIdx, SegIdx) -> bool> AcceptIntersection for F {
    fn accept(&self, a: SegIdx, b: SegIdx) -> bool {
        self(a, b)
    }
}

/// Encapsulates the state of the sweep-line algorithm and allows stepping through events.
///
/// The sweep moves from left to right. It starts with an entrance and an exit
/// event for every segment, and whenever two segments become adjacent in the
/// sweep line it checks whether they meet. If they do, the meeting point
/// becomes a new event.
///
/// Intersections are collected in two lists: [`Sweeper::intersections`] has
/// every distinct point where two segments were found to meet, and
/// [`Sweeper::accepted`] has the distinct points whose segment pair passed
/// the [`AcceptIntersection`] filter.
///
/// Nothing here is fatal. If an event refers to a segment that isn't where
/// it's expected to be (which can happen when several events are almost
/// simultaneous), the sweeper logs a warning and carries on.
#[derive(Clone, Debug)]
pub struct Sweeper<'segs, A = (), T = NoTrace, F = AcceptAll> {
    segments: &'segs Segments<A>,
    eps: f64,
    sweep_x: f64,
    status: SweepStatus,
    queue: EventQueue,
    intersections: Vec<Point>,
    accepted: Vec<Point>,
    trace: T,
    filter: F,
}

impl<'segs, A> Sweeper<'segs, A> {
    /// Creates a new sweeper for a collection of segments.
    pub fn new(segments: &'segs Segments<A>, config: SweepConfig) -> Self {
        Sweeper {
            segments,
            eps: config.eps,
            sweep_x: f64::NEG_INFINITY,
            status: SweepStatus::new(),
            queue: EventQueue::from_segments(segments),
            intersections: Vec::new(),
            accepted: Vec::new(),
            trace: NoTrace,
            filter: AcceptAll,
        }
    }
}

impl<'segs, A, T: Trace, F: AcceptIntersection> Sweeper<'segs, A, T, F> {
    /// Sends trace messages to `trace` instead.
    pub fn with_trace<U: Trace>(self, trace: U) -> Sweeper<'segs, A, U, F> {
        Sweeper {
            segments: self.segments,
            eps: self.eps,
            sweep_x: self.sweep_x,
            status: self.status,
            queue: self.queue,
            intersections: self.intersections,
            accepted: self.accepted,
            trace,
            filter: self.filter,
        }
    }

    /// Uses `filter` to decide which intersections to accept.
    pub fn with_filter<G: AcceptIntersection>(self, filter: G) -> Sweeper<'segs, A, T, G> {
        Sweeper {
            segments: self.segments,
            eps: self.eps,
            sweep_x: self.sweep_x,
            status: self.status,
            queue: self.queue,
            intersections: self.intersections,
            accepted: self.accepted,
            trace: self.trace,
            filter,
        }
    }

    /// The segments we're sweeping.
    pub fn segments(&self) -> &'segs Segments<A> {
        self.segments
    }

    /// The largest `x` coordinate processed so far.
    ///
    /// This is negative infinity before the first event.
    pub fn sweep_x(&self) -> f64 {
        self.sweep_x
    }

    /// The current sweep line.
    pub fn status(&self) -> &SweepStatus {
        &self.status
    }

    /// The events that haven't been processed yet.
    pub fn pending(&self) -> &EventQueue {
        &self.queue
    }

    /// All the distinct intersection points found so far, in the order they were found.
    pub fn intersections(&self) -> &[Point] {
        &self.intersections
    }

    /// The distinct intersection points found so far whose segments were
    /// accepted by the filter, in the order they were found.
    pub fn accepted(&self) -> &[Point] {
        &self.accepted
    }

    /// Consumes the sweeper, returning the accepted intersection points.
    pub fn into_accepted(self) -> Vec<Point> {
        self.accepted
    }

    /// Is the sweep finished?
    pub fn is_done(&self) -> bool {
        self.queue.is_empty()
    }

    /// Processes the next event, scheduling any intersections it discovers.
    ///
    /// Returns the processed event, or `None` if the sweep is finished.
    pub fn step(&mut self) -> Option<Event> {
        let event = self.queue.pop(self.eps)?;
        for candidate in self.process_event(event) {
            self.schedule(candidate);
        }
        self.check_invariants();
        Some(event)
    }

    /// Runs the sweep to completion.
    pub fn run(&mut self) {
        while self.step().is_some() {}
    }

    /// Processes a single event, returning the intersection events it discovers.
    ///
    /// The returned events are not scheduled; [`Sweeper::step`] does that.
    /// This is for callers that want to manage their own queue.
    pub fn process_event(&mut self, event: Event) -> Candidates {
        self.sweep_x = self.sweep_x.max(event.x());
        match event.kind {
            EventKind::Left(seg) => self.handle_left(seg, event.point),
            EventKind::Right(seg) => self.handle_right(seg),
            EventKind::Intersection(a, b) => self.handle_intersection(a, b, event.point),
        }
    }

    fn schedule(&mut self, event: Event) {
        let point = event.point;
        let Some((a, b)) = event.kind.pair() else {
            self.queue.push(event);
            return;
        };
        match self.queue.schedule(event, self.sweep_x, self.eps) {
            Scheduled::Added => {
                self.note(|| format!("Scheduling intersection of {a:?} and {b:?} at {point:?}"))
            }
            Scheduled::Duplicate => self.note(|| {
                format!("Intersection of {a:?} and {b:?} at {point:?} already scheduled")
            }),
            Scheduled::Behind => self.note(|| {
                format!("Dropping intersection of {a:?} and {b:?} at {point:?}: behind sweep line")
            }),
        }
    }

    fn handle_left(&mut self, seg: SegIdx, point: Point) -> Candidates {
        let pos = self.status.insert(seg, point, self.segments, self.eps);
        self.note(|| format!("Inserted {seg:?} at position {pos}"));

        let neighbors = self.status.neighbors(pos);
        let mut ret = Candidates::new();
        if let Some(ev) = neighbors.below.and_then(|below| self.test_pair(below, seg)) {
            ret.push(ev);
        }
        if let Some(ev) = neighbors.above.and_then(|above| self.test_pair(seg, above)) {
            ret.push(ev);
        }
        ret
    }

    fn handle_right(&mut self, seg: SegIdx) -> Candidates {
        let Some(neighbors) = self.status.remove(seg) else {
            self.warn(format!("{seg:?} not in status at its exit"));
            return Candidates::new();
        };
        self.note(|| format!("Removed {seg:?} from status"));

        let mut ret = Candidates::new();
        if let (Some(below), Some(above)) = (neighbors.below, neighbors.above) {
            ret.extend(self.test_pair(below, above));
        }
        ret
    }

    fn handle_intersection(&mut self, a: SegIdx, b: SegIdx, point: Point) -> Candidates {
        self.record(a, b, point);

        let (Some(pos_a), Some(pos_b)) = (self.status.position(a), self.status.position(b)) else {
            self.warn(format!("{a:?} or {b:?} not in status for intersection"));
            return Candidates::new();
        };
        let (lo, hi, lo_seg, hi_seg) = if pos_a < pos_b {
            (pos_a, pos_b, a, b)
        } else {
            (pos_b, pos_a, b, a)
        };

        // Touching or overlapping segments meet without changing their order.
        // A vertical segment that reaches another one moves above it.
        let order = self.segments[lo_seg].cmp_at(&self.segments[hi_seg], &point, self.eps);
        if order != Ordering::Greater {
            self.note(|| format!("{lo_seg:?} and {hi_seg:?} meet at {point:?} without crossing"));
            return Candidates::new();
        }

        if hi == lo + 1 {
            if !self.status.swap(lo_seg, hi_seg) {
                self.warn(format!("can't swap {lo_seg:?} and {hi_seg:?}"));
                return Candidates::new();
            }
            self.note(|| format!("Swapped {lo_seg:?} and {hi_seg:?}"));
        } else {
            // Something is between them, so more than two segments meet here.
            self.reorder(lo, hi, &point);
        }

        // Only the ends of the reordered range have new neighbors.
        let mut ret = Candidates::new();
        let below = lo.checked_sub(1).and_then(|p| self.status.get(p));
        if let Some(ev) = below
            .zip(self.status.get(lo))
            .and_then(|(below, seg)| self.test_pair(below, seg))
        {
            ret.push(ev);
        }
        if let Some(ev) = self
            .status
            .get(hi)
            .zip(self.status.get(hi + 1))
            .and_then(|(seg, above)| self.test_pair(seg, above))
        {
            ret.push(ev);
        }
        ret
    }

    // Insertion-sorts the sweep line between `lo` and `hi` (inclusive) into
    // its order just after `point`, one adjacent swap at a time.
    fn reorder(&mut self, lo: usize, hi: usize, point: &Point) {
        for i in lo + 1..=hi {
            let mut j = i;
            while j > lo {
                let (Some(lower), Some(upper)) = (self.status.get(j - 1), self.status.get(j))
                else {
                    break;
                };
                if self.segments[lower].cmp_at(&self.segments[upper], point, self.eps)
                    != Ordering::Greater
                {
                    break;
                }
                self.status.swap(lower, upper);
                self.note(|| format!("Swapped {lower:?} and {upper:?}"));
                j -= 1;
            }
        }
    }

    // `lower` and `upper` are adjacent in the sweep line, in that order.
    fn test_pair(&mut self, lower: SegIdx, upper: SegIdx) -> Option<Event> {
        let point = self.segments[lower].intersection(&self.segments[upper], self.eps)?;
        self.note(|| format!("Found candidate intersection: {lower:?} and {upper:?} at {point:?}"));
        Some(Event::intersection(point, lower, upper))
    }

    fn record(&mut self, a: SegIdx, b: SegIdx, point: Point) {
        let eps = self.eps;
        if !self.intersections.iter().any(|p| p.approx_eq(&point, eps)) {
            self.intersections.push(point);
            self.note(|| format!("Intersection between {a:?} and {b:?} at {point:?}"));
        }
        if self.filter.accept(a, b) && !self.accepted.iter().any(|p| p.approx_eq(&point, eps)) {
            self.accepted.push(point);
            self.note(|| format!("Accepted intersection at {point:?} between {a:?} and {b:?}"));
        }
    }

    fn note(&mut self, msg: impl FnOnce() -> String) {
        if self.trace.enabled() {
            self.trace.message(&msg());
        }
    }

    fn warn(&mut self, msg: String) {
        log::warn!("{msg}");
        self.trace.message(&format!("Warning: {msg}"));
    }

    #[cfg(feature = "slow-asserts")]
    fn check_invariants(&self) {
        // While there are still events at the current position, the order
        // can legitimately be in flux.
        let settled = self
            .queue
            .peek()
            .is_none_or(|next| next.x() > self.sweep_x + self.eps);
        if settled {
            if let Some((lower, upper)) =
                self.status
                    .find_invalid_order(self.sweep_x, self.segments, self.eps)
            {
                panic!(
                    "{lower:?} and {upper:?} out of order at x={:?}: {:?}",
                    self.sweep_x, self.status
                );
            }
        }
    }

    #[cfg(not(feature = "slow-asserts"))]
    fn check_invariants(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators;
    use crate::DEFAULT_EPS as EPS;
    use proptest::prelude::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn mk_segs(segs: &[((f64, f64), (f64, f64))]) -> Segments {
        segs.iter().copied().collect()
    }

    fn run(segs: &Segments) -> Vec<Point> {
        let mut sweeper = Sweeper::new(segs, SweepConfig::default());
        sweeper.run();
        sweeper.into_accepted()
    }

    fn sorted(mut ps: Vec<Point>) -> Vec<Point> {
        ps.sort();
        ps
    }

    #[test]
    fn single_crossing() {
        let segs = mk_segs(&[((0.0, 0.0), (10.0, 10.0)), ((0.0, 10.0), (10.0, 0.0))]);
        assert_eq!(run(&segs), vec![p(5.0, 5.0)]);
    }

    #[test]
    fn no_segments() {
        let segs: Segments = Segments::default();
        let mut sweeper = Sweeper::new(&segs, SweepConfig::default());
        assert!(sweeper.is_done());
        assert_eq!(sweeper.step(), None);
        assert!(sweeper.intersections().is_empty());
    }

    #[test]
    fn parallel() {
        let segs = mk_segs(&[
            ((0.0, 0.0), (10.0, 1.0)),
            ((0.0, 1.0), (10.0, 2.0)),
            ((0.0, 2.0), (10.0, 3.0)),
        ]);
        assert!(run(&segs).is_empty());
    }

    #[test]
    fn collinear_overlap() {
        let segs = mk_segs(&[((0.0, 0.0), (10.0, 0.0)), ((5.0, 0.0), (15.0, 0.0))]);
        for _ in 0..3 {
            assert_eq!(run(&segs), vec![p(5.0, 0.0)]);
        }
    }

    #[test]
    fn vertical_and_horizontal() {
        let segs = mk_segs(&[
            ((0.0, 5.0), (10.0, 5.0)),
            ((4.0, 0.0), (4.0, 10.0)),
            ((6.0, 10.0), (6.0, 0.0)),
        ]);
        assert_eq!(sorted(run(&segs)), vec![p(4.0, 5.0), p(6.0, 5.0)]);
    }

    #[test]
    fn vertical_crosses_several() {
        let segs = mk_segs(&[
            ((0.0, 2.0), (10.0, 2.0)),
            ((0.0, 5.0), (10.0, 5.0)),
            ((0.0, 8.0), (10.0, 8.0)),
            ((5.0, 0.0), (5.0, 10.0)),
        ]);
        assert_eq!(
            sorted(run(&segs)),
            vec![p(5.0, 2.0), p(5.0, 5.0), p(5.0, 8.0)]
        );
    }

    #[test]
    fn vertical_climbs_past_slanted_segments() {
        let segs = mk_segs(&[
            ((0.0, 0.0), (10.0, 4.0)),
            ((0.0, 10.0), (10.0, 6.0)),
            ((5.0, 11.0), (5.0, -1.0)),
        ]);
        let mut sweeper = Sweeper::new(&segs, SweepConfig::default());
        while sweeper.step().is_some_and(|ev| ev.kind != EventKind::Left(SegIdx(2))) {}
        assert_eq!(
            sweeper.status().as_slice(),
            &[SegIdx(2), SegIdx(0), SegIdx(1)]
        );

        // Each crossing moves the vertical segment up past one neighbor.
        sweeper.step();
        assert_eq!(
            sweeper.status().as_slice(),
            &[SegIdx(0), SegIdx(2), SegIdx(1)]
        );
        sweeper.step();
        assert_eq!(
            sweeper.status().as_slice(),
            &[SegIdx(0), SegIdx(1), SegIdx(2)]
        );

        sweeper.run();
        assert_eq!(sweeper.intersections(), &[p(5.0, 2.0), p(5.0, 8.0)]);
        assert!(sweeper.status().is_empty());
    }

    #[test]
    fn segment_starting_on_a_vertical() {
        let segs = mk_segs(&[
            ((0.0, 2.0), (10.0, 2.0)),
            ((0.0, 8.0), (10.0, 8.0)),
            ((5.0, 0.0), (5.0, 10.0)),
            ((5.0, 5.0), (10.0, 6.0)),
        ]);
        assert_eq!(
            sorted(run(&segs)),
            vec![p(5.0, 2.0), p(5.0, 5.0), p(5.0, 8.0)]
        );
    }

    #[test]
    fn three_through_a_point() {
        let segs = mk_segs(&[
            ((-1.0, -1.0), (1.0, 1.0)),
            ((-1.0, 0.0), (1.0, 0.0)),
            ((-1.0, 1.0), (1.0, -1.0)),
        ]);
        let mut sweeper = Sweeper::new(&segs, SweepConfig::default());
        while sweeper.sweep_x() < 0.0 {
            sweeper.step();
        }
        // Finish up all the events at the crossing point.
        while sweeper.pending().peek().is_some_and(|ev| ev.x() < 0.5) {
            sweeper.step();
        }
        assert_eq!(sweeper.intersections(), &[p(0.0, 0.0)]);
        assert_eq!(sweeper.status().as_slice(), &[SegIdx(2), SegIdx(1), SegIdx(0)]);
        assert_eq!(sweeper.status().find_invalid_order(0.0, &segs, EPS), None);

        sweeper.run();
        assert!(sweeper.status().is_empty());
    }

    #[test]
    fn status_after_crossing() {
        let segs = mk_segs(&[((0.0, 0.0), (10.0, 10.0)), ((0.0, 10.0), (10.0, 0.0))]);
        let mut sweeper = Sweeper::new(&segs, SweepConfig::default());

        sweeper.step();
        sweeper.step();
        assert_eq!(sweeper.status().as_slice(), &[SegIdx(0), SegIdx(1)]);
        assert_eq!(sweeper.sweep_x(), 0.0);

        let ev = sweeper.step().unwrap();
        assert_eq!(ev.kind, EventKind::Intersection(SegIdx(0), SegIdx(1)));
        assert_eq!(sweeper.status().as_slice(), &[SegIdx(1), SegIdx(0)]);
        assert_eq!(sweeper.sweep_x(), 5.0);

        sweeper.run();
        assert!(sweeper.status().is_empty());
    }

    #[test]
    fn shared_endpoints_are_intersections() {
        // A "V" shape: the two segments share their left endpoint.
        let segs = mk_segs(&[((0.0, 0.0), (10.0, 10.0)), ((0.0, 0.0), (10.0, -10.0))]);
        assert_eq!(run(&segs), vec![p(0.0, 0.0)]);
    }

    #[test]
    fn stale_intersection_event() {
        let segs = mk_segs(&[((0.0, 0.0), (10.0, 10.0)), ((0.0, 10.0), (10.0, 0.0))]);
        let mut lines = Vec::new();
        let mut sweeper = Sweeper::new(&segs, SweepConfig::default())
            .with_trace(|msg: &str| lines.push(msg.to_owned()));

        // Neither segment has entered yet.
        let candidates =
            sweeper.process_event(Event::intersection(p(5.0, 5.0), SegIdx(0), SegIdx(1)));
        assert!(candidates.is_empty());
        assert!(sweeper.status().is_empty());
        drop(sweeper);
        assert!(lines.iter().any(|l| l.starts_with("Warning")));
    }

    #[test]
    fn missing_exit() {
        let segs = mk_segs(&[((0.0, 0.0), (10.0, 10.0))]);
        let mut sweeper = Sweeper::new(&segs, SweepConfig::default());
        let candidates = sweeper.process_event(Event::right(p(10.0, 10.0), SegIdx(0)));
        assert!(candidates.is_empty());
    }

    #[test]
    fn filter() {
        let segs = mk_segs(&[
            ((0.0, 0.0), (10.0, 10.0)),
            ((0.0, 10.0), (10.0, 0.0)),
            ((0.0, 2.0), (10.0, 2.0)),
        ]);
        let mut sweeper = Sweeper::new(&segs, SweepConfig::default())
            .with_filter(|a: SegIdx, b: SegIdx| a.0.min(b.0) == 0 && a.0.max(b.0) == 1);
        sweeper.run();
        assert_eq!(sweeper.intersections().len(), 3);
        assert_eq!(sweeper.accepted(), &[p(5.0, 5.0)]);
    }

    #[test]
    fn grid() {
        for n in 1..6 {
            let segs: Segments = generators::grid(n).into_iter().collect();
            assert_eq!(run(&segs).len(), n * n);
        }
    }

    #[test]
    fn deterministic() {
        let segs: Segments = generators::grid(4).into_iter().collect();
        assert_eq!(run(&segs), run(&segs));
    }

    // The O(n^2) algorithm, restricted to proper crossings.
    fn crossings(segs: &Segments) -> Vec<Point> {
        crate::brute_force_intersections(segs, SweepConfig::default())
    }

    fn close_to_any(p: &Point, ps: &[Point]) -> bool {
        ps.iter().any(|q| p.approx_eq(q, 1e-6))
    }

    // Segments in general position, so that the sweep and the brute-force
    // algorithm must agree exactly.
    fn general_position(segs: &[((f64, f64), (f64, f64))]) -> bool {
        let segs: Segments = segs.iter().copied().collect();
        let mut xs: Vec<f64> = segs.segments().flat_map(|s| [s.a.x, s.b.x]).collect();
        for (i, s) in segs.segments().enumerate() {
            for t in segs.segments().skip(i + 1) {
                for (u, v, w) in [(s.a, s.b, t.a), (s.a, s.b, t.b), (t.a, t.b, s.a), (t.a, t.b, s.b)] {
                    if crate::geom::orient(&u, &v, &w).abs() < 1e-3 {
                        return false;
                    }
                }
                if let Some(x) = s.intersection(t, EPS) {
                    xs.push(x.x);
                }
            }
        }
        xs.sort_by(f64::total_cmp);
        xs.windows(2).all(|w| w[1] - w[0] > 1e-6)
    }

    fn segment() -> impl Strategy<Value = ((f64, f64), (f64, f64))> {
        ((-100.0..100.0, -100.0..100.0), (-100.0..100.0, -100.0..100.0))
    }

    // The points where two segments cross at a point interior to both.
    fn proper_crossings(segs: &Segments) -> Vec<Point> {
        let all: Vec<_> = segs.segments().collect();
        let mut ret = Vec::new();
        for (i, s) in all.iter().enumerate() {
            for t in &all[i + 1..] {
                let o = crate::geom::orient;
                let s_sides = o(&s.a, &s.b, &t.a) * o(&s.a, &s.b, &t.b);
                let t_sides = o(&t.a, &t.b, &s.a) * o(&t.a, &t.b, &s.b);
                if s_sides < 0.0 && t_sides < 0.0 {
                    ret.extend(s.intersection(t, EPS));
                }
            }
        }
        ret
    }

    // Segments with small integer coordinates, so that there are lots of
    // vertical and horizontal segments, shared endpoints, and overlaps.
    fn grid_segment() -> impl Strategy<Value = ((f64, f64), (f64, f64))> {
        let coord = || (0..7i32).prop_map(f64::from);
        ((coord(), coord()), (coord(), coord())).prop_filter("zero length", |(a, b)| a != b)
    }

    proptest! {
    #[test]
    fn agrees_with_brute_force(segs in prop::collection::vec(segment(), 2..10)) {
        prop_assume!(general_position(&segs));
        let segs = mk_segs(&segs);
        let expected = crossings(&segs);
        let found = run(&segs);

        prop_assert_eq!(found.len(), expected.len());
        for x in &found {
            prop_assert!(close_to_any(x, &expected), "{x:?} isn't an intersection");
        }
        for x in &expected {
            prop_assert!(close_to_any(x, &found), "missed {x:?}");
        }
    }

    #[test]
    fn order_invariant(segs in prop::collection::vec(segment(), 2..10)) {
        prop_assume!(general_position(&segs));
        let segs = mk_segs(&segs);
        let mut sweeper = Sweeper::new(&segs, SweepConfig::default());
        while sweeper.step().is_some() {
            let x = sweeper.sweep_x();
            let settled = sweeper.pending().peek().is_none_or(|next| next.x() > x + EPS);
            if settled {
                prop_assert_eq!(sweeper.status().find_invalid_order(x, &segs, EPS), None);
            }
        }
    }

    #[test]
    fn finds_crossings_on_a_grid(segs in prop::collection::vec(grid_segment(), 2..8)) {
        let segs = mk_segs(&segs);
        let mut sweeper = Sweeper::new(&segs, SweepConfig::default());
        sweeper.run();
        for x in proper_crossings(&segs) {
            prop_assert!(
                close_to_any(&x, sweeper.intersections()),
                "missed {x:?} in {segs:?}"
            );
        }
    }
    }
}
