//! The event queue.

use std::collections::BTreeSet;

use crate::segments::Segments;

use super::event::{Event, QueuedEvent};

/// What happened to an event that was offered to the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheduled {
    /// The event was added to the queue.
    Added,
    /// The same intersection is already in the queue, or was just processed
    /// at the current sweep position.
    Duplicate,
    /// The event is behind the sweep line.
    Behind,
}

/// The pending events of a sweep, in increasing `(x, y)` order.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    pending: BTreeSet<QueuedEvent>,
    next_seq: u64,
    /// Intersections that were popped at the current sweep position.
    ///
    /// If one of these gets rediscovered before the sweep moves on, it's a
    /// duplicate. Anything older than this is behind the sweep line anyway.
    recent: Vec<Event>,
}

impl EventQueue {
    /// Creates the initial queue for a collection of segments: one entrance
    /// and one exit per segment.
    pub fn from_segments<A>(segments: &Segments<A>) -> Self {
        let mut ret = EventQueue::default();
        for idx in segments.indices() {
            let seg = &segments[idx];
            ret.push(Event::left(seg.left(), idx));
            ret.push(Event::right(seg.right(), idx));
        }
        ret
    }

    /// The number of pending events.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Are there no more pending events?
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// The next event, without removing it.
    pub fn peek(&self) -> Option<&Event> {
        self.pending.first().map(|q| &q.event)
    }

    /// Iterates over the pending events, in the order they'll be processed.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.pending.iter().map(|q| &q.event)
    }

    /// Adds an event unconditionally.
    pub fn push(&mut self, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert(QueuedEvent { event, seq });
    }

    /// Removes and returns the next event.
    pub fn pop(&mut self, eps: f64) -> Option<Event> {
        let event = self.pending.pop_first()?.event;
        if self
            .recent
            .last()
            .is_some_and(|prev| event.x() - prev.x() > eps)
        {
            self.recent.clear();
        }
        if event.kind.pair().is_some() {
            self.recent.push(event);
        }
        Some(event)
    }

    /// Offers a newly discovered intersection event to the queue.
    ///
    /// The event is dropped if it is more than `eps` behind `sweep_x`, or if
    /// an intersection of the same two segments at the same position (up to
    /// `eps`) is pending or was just processed.
    pub fn schedule(&mut self, event: Event, sweep_x: f64, eps: f64) -> Scheduled {
        if event.x() < sweep_x - eps {
            return Scheduled::Behind;
        }
        let is_dup = |other: &Event| other.is_duplicate_of(&event, eps);
        if self.iter().any(is_dup) || self.recent.iter().any(is_dup) {
            return Scheduled::Duplicate;
        }
        self.push(event);
        Scheduled::Added
    }
}
