//! Solvers for initial-value problems `dy/dt = f(t, y)`, `y(t₀) = y₀`.
//!
//! The model is called at whatever times the solver needs, including trial
//! points of rejected steps, so it must be a pure function of its input.

pub mod dopri5;
pub mod euler;
