use crate::{geom::Point, num::CheapOrderedFloat, segments::SegIdx};

/// What happens at an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EventKind {
    /// Two segments meet.
    ///
    /// The first segment is the one that was lower in the sweep line when the
    /// intersection was discovered.
    Intersection(SegIdx, SegIdx),
    /// A segment enters the sweep line at its left endpoint.
    Left(SegIdx),
    /// A segment leaves the sweep line at its right endpoint.
    Right(SegIdx),
}

impl EventKind {
    // Among events at the same position, intersections go first, then
    // entrances, then exits.
    fn rank(&self) -> u8 {
        match self {
            EventKind::Intersection(..) => 0,
            EventKind::Left(_) => 1,
            EventKind::Right(_) => 2,
        }
    }

    /// If this is an intersection, the pair of segments involved.
    pub fn pair(&self) -> Option<(SegIdx, SegIdx)> {
        match *self {
            EventKind::Intersection(a, b) => Some((a, b)),
            _ => None,
        }
    }

    /// Is this an intersection involving the same two segments as `other`, in either order?
    pub fn same_pair(&self, other: &EventKind) -> bool {
        match (self.pair(), other.pair()) {
            (Some((a0, b0)), Some((a1, b1))) => (a0, b0) == (a1, b1) || (a0, b0) == (b1, a1),
            _ => false,
        }
    }
}

/// A position in the plane where the sweep line needs to do something.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    /// Where the event happens.
    pub point: Point,
    /// What happens.
    pub kind: EventKind,
}

impl Event {
    /// An event for `seg` entering the sweep line at `point`.
    pub fn left(point: Point, seg: SegIdx) -> Self {
        Event {
            point,
            kind: EventKind::Left(seg),
        }
    }

    /// An event for `seg` leaving the sweep line at `point`.
    pub fn right(point: Point, seg: SegIdx) -> Self {
        Event {
            point,
            kind: EventKind::Right(seg),
        }
    }

    /// An event for `lower` and `upper` meeting at `point`.
    pub fn intersection(point: Point, lower: SegIdx, upper: SegIdx) -> Self {
        Event {
            point,
            kind: EventKind::Intersection(lower, upper),
        }
    }

    /// The horizontal position of this event.
    pub fn x(&self) -> f64 {
        self.point.x
    }

    /// Is `other` the same intersection as this one, up to `eps`?
    pub fn is_duplicate_of(&self, other: &Event, eps: f64) -> bool {
        self.kind.same_pair(&other.kind) && self.point.approx_eq(&other.point, eps)
    }
}

/// An event together with its position in the queue's insertion order.
///
/// The sequence number breaks ties between events that would otherwise
/// compare as equal, so the processing order is stable within one run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct QueuedEvent {
    pub event: Event,
    pub seq: u64,
}

impl QueuedEvent {
    fn key(&self) -> (CheapOrderedFloat, CheapOrderedFloat, u8, u64) {
        (
            CheapOrderedFloat::from(self.event.point.x),
            CheapOrderedFloat::from(self.event.point.y),
            self.event.kind.rank(),
            self.seq,
        )
    }
}

impl Eq for QueuedEvent {}

impl Ord for QueuedEvent {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for QueuedEvent {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queued(x: f64, y: f64, kind: EventKind, seq: u64) -> QueuedEvent {
        QueuedEvent {
            event: Event {
                point: Point::new(x, y),
                kind,
            },
            seq,
        }
    }

    #[test]
    fn ordering() {
        let s = SegIdx(0);
        let t = SegIdx(1);
        let mut events = vec![
            queued(1.0, 0.0, EventKind::Right(s), 0),
            queued(1.0, 0.0, EventKind::Left(t), 1),
            queued(0.0, 5.0, EventKind::Left(s), 2),
            queued(1.0, -1.0, EventKind::Right(t), 3),
            queued(1.0, 0.0, EventKind::Intersection(s, t), 4),
            queued(1.0, 0.0, EventKind::Intersection(t, s), 5),
        ];
        events.sort();
        let seqs: Vec<_> = events.iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![2, 3, 4, 5, 1, 0]);
    }

    #[test]
    fn duplicates() {
        let s = SegIdx(0);
        let t = SegIdx(1);
        let u = SegIdx(2);
        let ev = Event::intersection(Point::new(1.0, 1.0), s, t);
        let eps = 1e-9;

        assert!(ev.is_duplicate_of(&Event::intersection(Point::new(1.0, 1.0), t, s), eps));
        assert!(ev.is_duplicate_of(&Event::intersection(Point::new(1.0 + 1e-10, 1.0), s, t), eps));
        assert!(!ev.is_duplicate_of(&Event::intersection(Point::new(1.0, 1.0), s, u), eps));
        assert!(!ev.is_duplicate_of(&Event::intersection(Point::new(1.0, 1.1), s, t), eps));
        assert!(!ev.is_duplicate_of(&Event::left(Point::new(1.0, 1.0), s), eps));
    }
}
