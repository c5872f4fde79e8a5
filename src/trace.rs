//! Human-readable tracing of what the sweep does.
//!
//! The sweep reports each structural change (insertions, removals, swaps,
//! discovered and scheduled intersections) to a [`Trace`] sink, one message
//! per call. Messages are advisory only: nothing in the sweep depends on them,
//! and a sink can't make the sweep fail.

/// A sink for trace messages.
///
/// This is implemented for every `FnMut(&str)`, so the simplest sink is a closure:
///
/// ```
/// use linecross::{Sweeper, Segments, SweepConfig};
///
/// let segs: Segments = [((0.0, 0.0), (2.0, 2.0)), ((0.0, 2.0), (2.0, 0.0))]
///     .into_iter()
///     .collect();
/// let mut lines = Vec::new();
/// let mut sweeper = Sweeper::new(&segs, SweepConfig::default())
///     .with_trace(|msg: &str| lines.push(msg.to_owned()));
/// sweeper.run();
/// drop(sweeper);
/// assert!(lines.iter().any(|line| line.starts_with("Swapped")));
/// ```
pub trait Trace {
    /// Receives one message.
    fn message(&mut self, msg: &str);

    /// Does this sink want messages at all?
    ///
    /// If not, the sweep skips formatting them.
    fn enabled(&self) -> bool {
        true
    }
}

impl<F: FnMut(&str)> Trace for F {
    fn message(&mut self, msg: &str) {
        self(msg)
    }
}

/// A sink that drops every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl Trace for NoTrace {
    fn message(&mut self, _msg: &str) {}

    fn enabled(&self) -> bool {
        false
    }
}

/// A sink that forwards every message to the `log` crate, at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTrace;

impl Trace for LogTrace {
    fn message(&mut self, msg: &str) {
        log::debug!(target: "linecross::sweep", "{msg}");
    }

    fn enabled(&self) -> bool {
        log::log_enabled!(target: "linecross::sweep", log::Level::Debug)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{Segments, SweepConfig, Sweeper};

    #[test]
    fn closures_collect() {
        let mut lines = Vec::new();
        {
            let mut sink = |msg: &str| lines.push(msg.to_owned());
            sink.message("one");
            Trace::message(&mut sink, "two");
            assert!(sink.enabled());
        }
        assert_eq!(lines, ["one", "two"]);
    }

    #[test]
    fn no_trace_is_disabled() {
        assert!(!NoTrace.enabled());
    }

    struct Capture(Mutex<Vec<String>>);

    impl log::Log for Capture {
        fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
            metadata.target() == "linecross::sweep"
        }

        fn log(&self, record: &log::Record<'_>) {
            if self.enabled(record.metadata()) {
                self.0.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    #[test]
    fn log_trace_forwards_to_log() {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(log::LevelFilter::Debug);
        assert!(LogTrace.enabled());

        let segs: Segments = [((0.0, 0.0), (2.0, 2.0)), ((0.0, 2.0), (2.0, 0.0))]
            .into_iter()
            .collect();
        let mut sweeper = Sweeper::new(&segs, SweepConfig::default()).with_trace(LogTrace);
        sweeper.run();
        assert_eq!(sweeper.intersections(), &[crate::Point::new(1.0, 1.0)]);

        let lines = CAPTURE.0.lock().unwrap();
        assert!(lines.iter().any(|line| line == "Inserted s_1 at position 1"));
        assert!(lines.iter().any(|line| line == "Swapped s_0 and s_1"));
    }
}
