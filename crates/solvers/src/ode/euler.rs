//! Forward Euler solver.
//!
//! Steps a compartment model forward in time with a fixed step:
//!
//! ```text
//! y_{n+1} = y_n + f(t_n, y_n) · dt
//! ```
//!
//! Forward Euler is cheap and predictable but only first-order accurate. The
//! behavioral model's logistic terms can overshoot `[0, 1]` when `dt` is large
//! relative to the opinion drive; use [`dopri5`](super::dopri5) when accuracy
//! matters.
//!
//! # Example
//!
//! ```ignore
//! use outbreak_solvers::ode::euler;
//!
//! let solution = euler::solve_unobserved(&model, Sample::new(0.0, y0), 0.01, 1_000)?;
//!
//! for snapshot in &solution.history {
//!     println!("t={}: {:?}", snapshot.input.t, snapshot.input.state);
//! }
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use log::warn;
use outbreak_core::{Model, Observer, Rates, Sample, Snapshot, StepIntegrable};

/// Integrates a compartment model using forward Euler.
///
/// # Algorithm
///
/// 1. Call the model at the initial sample to get the initial snapshot.
/// 2. For each step:
///    - Step the state forward: `state + rates * dt`.
///    - Advance time by `dt`.
///    - Call the model to get the rates at the new sample.
///    - Fail with [`Error::NonFinite`] if the state or rates are not finite.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full history.
///
/// # Errors
///
/// Returns an error if `dt` is not finite and positive, if the model returns
/// an error, or if a state or its rates become non-finite.
pub fn solve<M, Obs, const N: usize>(
    model: &M,
    initial: Sample<N>,
    dt: f64,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    M: Model<Input = Sample<N>, Output = Rates<N>>,
    Obs: Observer<Event<N>, Action>,
{
    if !dt.is_finite() || dt <= 0.0 {
        return Err(Error::InvalidStep { dt });
    }

    let initial_rates = model.call(&initial).map_err(Error::model)?;
    let initial_snapshot = check_finite(Snapshot::new(initial, initial_rates))?;

    let mut history = Vec::with_capacity(steps + 1);
    history.push(initial_snapshot);

    let event = Event {
        step: 0,
        snapshot: initial_snapshot,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    let mut current = initial_snapshot;

    for step in 1..=steps {
        let next_input = Sample {
            t: current.input.t + dt,
            state: current.input.state.step(current.output, dt),
        };

        let next_rates = model.call(&next_input).map_err(Error::model)?;
        let next_snapshot = check_finite(Snapshot::new(next_input, next_rates))?;

        history.push(next_snapshot);

        let event = Event {
            step,
            snapshot: next_snapshot,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }

        current = next_snapshot;
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}

/// Fails on a sample or rates that are not finite, so a NaN stops the run
/// where it first appears.
fn check_finite<const N: usize>(
    snapshot: Snapshot<Sample<N>, Rates<N>>,
) -> Result<Snapshot<Sample<N>, Rates<N>>, Error> {
    if snapshot.input.state.is_finite() && snapshot.output.is_finite() {
        Ok(snapshot)
    } else {
        let t = snapshot.input.t;
        warn!("euler: non-finite state or rates at t = {t}");
        Err(Error::NonFinite { t })
    }
}

/// Integrates a compartment model using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M, const N: usize>(
    model: &M,
    initial: Sample<N>,
    dt: f64,
    steps: usize,
) -> Result<Solution<N>, Error>
where
    M: Model<Input = Sample<N>, Output = Rates<N>>,
{
    solve(model, initial, dt, steps, ())
}
