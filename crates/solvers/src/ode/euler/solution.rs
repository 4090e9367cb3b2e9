use outbreak_core::{Rates, Sample, Snapshot};

use crate::Trajectory;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an Euler integration.
#[derive(Debug, Clone)]
pub struct Solution<const N: usize> {
    /// How the solver terminated.
    pub status: Status,

    /// History of snapshots from each step (including initial state).
    pub history: Vec<Snapshot<Sample<N>, Rates<N>>>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl<const N: usize> Solution<N> {
    /// The visited time points and states, without the rates.
    #[must_use]
    pub fn trajectory(&self) -> Trajectory<N> {
        self.history
            .iter()
            .map(|snapshot| (snapshot.input.t, snapshot.input.state))
            .collect()
    }
}
