use log::{Level, debug, log_enabled, trace};
use outbreak_core::Observer;
use outbreak_solvers::ode::{dopri5, euler};

const DEFAULT_TARGET: &str = "outbreak::solve";

/// An observer that reports solver progress through the [`log`] facade.
///
/// Accepted steps (and every Euler step) are logged at `debug` with the time
/// and full state vector. Rejected Dormand–Prince trials are logged at
/// `trace` with the failed step size and error norm. Nothing is formatted
/// unless the target is enabled at that level.
///
/// The observer never requests an action.
///
/// # Example
///
/// ```ignore
/// let solution = dopri5::solve(&model, initial, 100.0, &config, LogObserver::new())?;
/// ```
#[derive(Debug, Clone)]
pub struct LogObserver {
    target: String,
    every: usize,
}

impl LogObserver {
    /// Creates an observer logging every step under `outbreak::solve`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: DEFAULT_TARGET.to_owned(),
            every: 1,
        }
    }

    /// Sets the log target.
    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Logs only every `n`th step. Step 0 is always logged; `n = 0` is
    /// treated as 1.
    #[must_use]
    pub fn every(mut self, n: usize) -> Self {
        self.every = n.max(1);
        self
    }

    fn wants(&self, step: usize) -> bool {
        step % self.every == 0
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, A> Observer<euler::Event<N>, A> for LogObserver {
    fn observe(&mut self, event: &euler::Event<N>) -> Option<A> {
        let target = self.target.as_str();
        if self.wants(event.step) && log_enabled!(target: target, Level::Debug) {
            let sample = &event.snapshot.input;
            debug!(
                target: target,
                "step {} t={} y={:?}",
                event.step,
                sample.t,
                sample.state.as_array()
            );
        }
        None
    }
}

impl<const N: usize, A> Observer<dopri5::Event<N>, A> for LogObserver {
    fn observe(&mut self, event: &dopri5::Event<N>) -> Option<A> {
        let target = self.target.as_str();
        match event {
            dopri5::Event::Accepted {
                step,
                snapshot,
                h,
                error,
            } => {
                if self.wants(*step) && log_enabled!(target: target, Level::Debug) {
                    debug!(
                        target: target,
                        "step {step} t={} h={h:e} err={error:.3} y={:?}",
                        snapshot.input.t,
                        snapshot.input.state.as_array()
                    );
                }
            }
            dopri5::Event::Rejected { t, h, error } => {
                trace!(target: target, "rejected t={t} h={h:e} err={error:.3}");
            }
        }
        None
    }
}

impl<E, A> Observer<E, A> for &mut LogObserver
where
    LogObserver: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
