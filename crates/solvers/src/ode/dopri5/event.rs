use outbreak_core::{Rates, Sample, Snapshot};

/// Event emitted by the Dormand–Prince solver.
#[derive(Debug, Clone)]
pub enum Event<const N: usize> {
    /// A step was accepted (step 0 is the initial sample).
    Accepted {
        step: usize,
        /// The new sample and the rates there.
        snapshot: Snapshot<Sample<N>, Rates<N>>,
        /// The step size just taken (zero for step 0).
        h: f64,
        /// Scaled error norm of the step; at most 1 when accepted.
        error: f64,
    },

    /// A trial step was rejected and will be retried with a smaller size.
    Rejected {
        /// Time at the start of the failed step.
        t: f64,
        h: f64,
        error: f64,
    },
}

impl<const N: usize> Event<N> {
    /// Time at the accepted sample, or at the start of the rejected step.
    #[must_use]
    pub fn t(&self) -> f64 {
        match self {
            Self::Accepted { snapshot, .. } => snapshot.input.t,
            Self::Rejected { t, .. } => *t,
        }
    }
}
