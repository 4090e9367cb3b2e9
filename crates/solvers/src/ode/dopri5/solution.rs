use crate::Trajectory;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the end of the span.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// Work counters for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub accepted: usize,
    pub rejected: usize,
    /// Number of model calls.
    pub evaluations: usize,
}

/// The result of a Dormand–Prince integration.
#[derive(Debug, Clone)]
pub struct Solution<const N: usize> {
    pub status: Status,

    /// The initial point and every accepted step.
    pub trajectory: Trajectory<N>,

    pub stats: Stats,
}
