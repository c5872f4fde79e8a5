//! Sweep configuration.

use crate::Error;

/// The default tolerance.
pub const DEFAULT_EPS: f64 = 1e-9;

/// Configuration for a sweep.
///
/// There is only one tolerance: the geometric predicates, the sweep-line
/// ordering, the event queue's duplicate detection, and the deduplication of
/// output points all use the same `eps`. Using different tolerances in
/// different places lets the event queue and the sweep line disagree about
/// which of two nearby things comes first.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Quantities with magnitude at most `eps` are treated as zero.
    pub eps: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self { eps: DEFAULT_EPS }
    }
}

impl SweepConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tolerance.
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Checks that the tolerance is finite and positive.
    pub fn validate(&self) -> Result<(), Error> {
        if self.eps.is_finite() && self.eps > 0.0 {
            Ok(())
        } else {
            Err(Error::BadTolerance(self.eps))
        }
    }
}
