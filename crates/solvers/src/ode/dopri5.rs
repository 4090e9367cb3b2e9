//! Adaptive Dormand–Prince 5(4) solver.
//!
//! # Algorithm
//!
//! Each step evaluates six stages, forms the fifth-order solution, and
//! evaluates the model once more at the new point. That last evaluation gives
//! both the embedded error estimate and the first stage of the next step.
//!
//! The error is the RMS over compartments of
//! `(y₅ − y₄) / (abs_tol + rel_tol · max(|yₙ|, |yₙ₊₁|))`. A step is accepted
//! when the error is at most 1. The next step size is `h · 0.9 · error^(−1/5)`,
//! clamped to `[0.2, 5]` times the current step (and never growing after a
//! rejection).
//!
//! # When to Use
//!
//! This is the default solver for the outbreak models. Discontinuities, such
//! as the behavioral model's switch at quarantine capacity, are handled by
//! rejecting and shrinking steps that straddle them.
//!
//! # Step Budget
//!
//! [`Config::max_steps`] limits accepted steps only. When the state slides
//! along a switch (quarantine held at capacity while exposed individuals keep
//! arriving), most trial steps straddle it and are rejected, often two or
//! three for every accepted one. Rejections between two accepted steps are
//! still finite: each one shrinks `h` by at least the safety factor until it
//! either succeeds or falls below [`Config::min_step`].
//!
//! # Observer Events
//!
//! - [`Event::Accepted`] for the initial sample (step 0) and each accepted step
//! - [`Event::Rejected`] for each rejected trial step
//!
//! Observers can return [`Action::StopEarly`] after any event.

mod action;
mod config;
mod error;
mod event;
mod solution;
mod tableau;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Stats, Status};

use log::{trace, warn};
use outbreak_core::{Model, Observer, Rates, Sample, Snapshot, State};

use crate::Trajectory;

use tableau::{
    A21, A31, A32, A41, A42, A43, A51, A52, A53, A54, A61, A62, A63, A64, A65, B1, B3, B4, B5, B6,
    C2, C3, C4, C5, E1, E3, E4, E5, E6, E7,
};

const SAFETY: f64 = 0.9;
const MIN_FACTOR: f64 = 0.2;
const MAX_FACTOR: f64 = 5.0;

/// Integrates a compartment model from `initial.t` to `t_end`.
///
/// The observer receives an [`Event`] for the initial sample and for every
/// accepted or rejected step. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if the config or span is invalid, the model fails, the
/// step size underflows, the state becomes non-finite, or the step budget
/// runs out.
pub fn solve<M, Obs, const N: usize>(
    model: &M,
    initial: Sample<N>,
    t_end: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    M: Model<Input = Sample<N>, Output = Rates<N>>,
    Obs: Observer<Event<N>, Action>,
{
    let t0 = initial.t;
    if !t0.is_finite() || !t_end.is_finite() || t_end < t0 {
        return Err(Error::InvalidSpan { t0, t_end });
    }

    let mut rhs = Rhs::new(model);
    let mut run = Run {
        trajectory: Trajectory::new(),
        stats: Stats::default(),
    };

    let mut t = t0;
    let mut y = initial.state;
    let mut k1 = rhs.eval(t, y)?;
    run.trajectory.push(t, y);

    let event = Event::Accepted {
        step: 0,
        snapshot: Snapshot::new(initial, k1),
        h: 0.0,
        error: 0.0,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(run.finish(Status::StoppedByObserver, &rhs));
    }

    let mut h = config.first_step(t_end - t0);

    while t < t_end {
        if run.stats.accepted == config.max_steps() {
            warn!("dopri5: step budget of {} exhausted at t = {t}", config.max_steps());
            return Err(Error::MaxStepsExceeded {
                t,
                max_steps: config.max_steps(),
            });
        }

        let remaining = t_end - t;
        let last = h >= remaining;
        if last {
            h = remaining;
        }

        let k2 = rhs.eval(t + C2 * h, y.advance(h, &[(A21, &k1)]))?;
        let k3 = rhs.eval(t + C3 * h, y.advance(h, &[(A31, &k1), (A32, &k2)]))?;
        let k4 = rhs.eval(
            t + C4 * h,
            y.advance(h, &[(A41, &k1), (A42, &k2), (A43, &k3)]),
        )?;
        let k5 = rhs.eval(
            t + C5 * h,
            y.advance(h, &[(A51, &k1), (A52, &k2), (A53, &k3), (A54, &k4)]),
        )?;
        let k6 = rhs.eval(
            t + h,
            y.advance(h, &[(A61, &k1), (A62, &k2), (A63, &k3), (A64, &k4), (A65, &k5)]),
        )?;

        let y_new = y.advance(h, &[(B1, &k1), (B3, &k3), (B4, &k4), (B5, &k5), (B6, &k6)]);
        let t_new = if last { t_end } else { t + h };
        let k7 = rhs.eval(t_new, y_new)?;

        let error_estimate = State::new([0.0; N]).advance(
            h,
            &[(E1, &k1), (E3, &k3), (E4, &k4), (E5, &k5), (E6, &k6), (E7, &k7)],
        );
        let error = error_norm(config, &error_estimate, &y, &y_new);
        let accepted = error <= 1.0;

        let event = if accepted {
            if !y_new.is_finite() {
                warn!("dopri5: state became non-finite at t = {t_new}");
                return Err(Error::NonFinite { t: t_new });
            }

            run.stats.accepted += 1;
            t = t_new;
            y = y_new;
            k1 = k7;
            run.trajectory.push(t, y);

            Event::Accepted {
                step: run.stats.accepted,
                snapshot: Snapshot::new(Sample { t, state: y }, k1),
                h,
                error,
            }
        } else {
            run.stats.rejected += 1;
            trace!("dopri5: rejected step h = {h} at t = {t} (error {error})");
            Event::Rejected { t, h, error }
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(run.finish(Status::StoppedByObserver, &rhs));
        }

        let next = (h * step_factor(error, accepted)).min(config.max_step());
        if next < config.min_step() {
            if accepted {
                h = config.min_step();
            } else if error.is_finite() {
                warn!("dopri5: step size {next} below minimum at t = {t}");
                return Err(Error::StepSizeUnderflow { t, h: next });
            } else {
                warn!("dopri5: non-finite error estimate at t = {t}");
                return Err(Error::NonFinite { t });
            }
        } else {
            h = next;
        }
    }

    Ok(run.finish(Status::Complete, &rhs))
}

/// Integrates a compartment model without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M, const N: usize>(
    model: &M,
    initial: Sample<N>,
    t_end: f64,
    config: &Config,
) -> Result<Solution<N>, Error>
where
    M: Model<Input = Sample<N>, Output = Rates<N>>,
{
    solve(model, initial, t_end, config, ())
}

/// Counts model calls.
struct Rhs<'a, M> {
    model: &'a M,
    evaluations: usize,
}

impl<'a, M> Rhs<'a, M> {
    fn new(model: &'a M) -> Self {
        Self {
            model,
            evaluations: 0,
        }
    }

    fn eval<const N: usize>(&mut self, t: f64, state: State<N>) -> Result<Rates<N>, Error>
    where
        M: Model<Input = Sample<N>, Output = Rates<N>>,
    {
        self.evaluations += 1;
        self.model
            .call(&Sample { t, state })
            .map_err(Error::model)
    }
}

struct Run<const N: usize> {
    trajectory: Trajectory<N>,
    stats: Stats,
}

impl<const N: usize> Run<N> {
    fn finish<M>(self, status: Status, rhs: &Rhs<'_, M>) -> Solution<N> {
        Solution {
            status,
            trajectory: self.trajectory,
            stats: Stats {
                evaluations: rhs.evaluations,
                ..self.stats
            },
        }
    }
}

fn error_norm<const N: usize>(
    config: &Config,
    estimate: &State<N>,
    y: &State<N>,
    y_new: &State<N>,
) -> f64 {
    if N == 0 {
        return 0.0;
    }
    let sum: f64 = (0..N)
        .map(|i| {
            let scale = config.abs_tol() + config.rel_tol() * y[i].abs().max(y_new[i].abs());
            (estimate[i] / scale).powi(2)
        })
        .sum();
    #[allow(clippy::cast_precision_loss)]
    let n = N as f64;
    (sum / n).sqrt()
}

fn step_factor(error: f64, accepted: bool) -> f64 {
    let factor = if error == 0.0 {
        MAX_FACTOR
    } else if error.is_finite() {
        (SAFETY * error.powf(-0.2)).clamp(MIN_FACTOR, MAX_FACTOR)
    } else {
        MIN_FACTOR
    };
    if accepted { factor } else { factor.min(1.0) }
}
