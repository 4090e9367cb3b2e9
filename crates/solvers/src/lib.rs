//! Numerical integrators for compartment models.
//!
//! Solvers take any [`Model`] mapping a [`Sample`] to [`Rates`] and produce a
//! [`Trajectory`]: the time points visited and the state at each one.
//!
//! # Solvers
//!
//! - [`ode::euler`] — fixed-step forward Euler
//! - [`ode::dopri5`] — adaptive Dormand–Prince 5(4)
//!
//! Both accept an [`Observer`] that sees every step and may stop the run early.
//!
//! [`Model`]: outbreak_core::Model
//! [`Sample`]: outbreak_core::Sample
//! [`Rates`]: outbreak_core::Rates
//! [`Observer`]: outbreak_core::Observer

pub mod ode;

mod trajectory;

pub use trajectory::Trajectory;
