//! The sweep-line implementation.
//!
//! The main entry point is [`Sweeper`], which finds all the intersection
//! points of a collection of line segments by moving a vertical line from
//! left to right. The pieces it's built from (the [`EventQueue`] and the
//! [`SweepStatus`]) are public too, mainly so that tests and visualizations
//! can look at them between steps.

mod event;
mod queue;
mod status;
mod sweeper;

pub use event::{Event, EventKind};
pub use queue::{EventQueue, Scheduled};
pub use status::{Neighbors, SweepStatus};
pub use sweeper::{AcceptAll, AcceptIntersection, Candidates, Sweeper};
