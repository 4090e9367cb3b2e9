//! Core traits and types for outbreak population models.
//!
//! This crate defines the shared abstractions that models, solvers, and
//! observers build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`State`], [`Rates`], [`Sample`] — fixed-length compartment vectors, their
//!   time derivatives, and the `(t, state)` pair every model is evaluated at
//! - [`Compartmental`] — a model that produces the right-hand side of a
//!   compartmental ODE system, with its compartment order spelled out

mod compartmental;
mod model;
mod observer;
mod state;
mod step;

pub use compartmental::Compartmental;
pub use observer::Observer;
pub use state::{Rates, Sample, State};
pub use step::{DerivativeOf, StepIntegrable};
pub use {model::Model, model::Snapshot};
