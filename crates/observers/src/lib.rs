//! Observers and presentation for outbreak model solutions.
//!
//! # Modules
//!
//! - [`traits`] — capability traits shared by the solvers' event and action
//!   types ([`HasTime`], [`CanStopEarly`])
//! - [`figure`] — fixed panel layouts selecting trajectory columns by index,
//!   with legends and titles for each model
//! - [`LogObserver`] — reports every solver step through the `log` facade
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] and [`show`] for rendering trajectories
//!   via egui. This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`HasTime`]: traits::HasTime
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod figure;
pub mod traits;

mod log_observer;

#[cfg(feature = "plot")]
mod plot;

pub use log_observer::LogObserver;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig, ShowError, show};
