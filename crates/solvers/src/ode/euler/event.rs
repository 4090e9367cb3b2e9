use outbreak_core::{Rates, Sample, Snapshot};

/// Event emitted by the Euler solver for each snapshot.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone)]
pub struct Event<const N: usize> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// The sample and the rates the model returned for it.
    pub snapshot: Snapshot<Sample<N>, Rates<N>>,
}
