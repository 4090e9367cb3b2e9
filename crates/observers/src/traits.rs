//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and used with either solver.
//!
//! # Example
//!
//! ```rust
//! use outbreak_core::Observer;
//! use outbreak_observers::traits::{CanStopEarly, HasTime};
//!
//! /// Stops the run once the solver passes `t_stop`.
//! struct StopAt {
//!     t_stop: f64,
//! }
//!
//! impl<E: HasTime, A: CanStopEarly> Observer<E, A> for StopAt {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() >= self.t_stop).then(A::stop_early)
//!     }
//! }
//! ```

use outbreak_solvers::ode::{dopri5, euler};

/// An event that happens at a point in time.
pub trait HasTime {
    /// Returns the simulation time of this event.
    fn time(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<const N: usize> HasTime for euler::Event<N> {
    fn time(&self) -> f64 {
        self.snapshot.input.t
    }
}

impl<const N: usize> HasTime for dopri5::Event<N> {
    fn time(&self) -> f64 {
        self.t()
    }
}

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for dopri5::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
