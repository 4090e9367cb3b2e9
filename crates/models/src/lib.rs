//! Compartmental population-dynamics models.
//!
//! Every model here is a pure right-hand side `dy/dt = f(t, y)`: a named
//! parameter set held by value plus a [`Compartmental`] implementation that
//! maps a [`Sample`] to [`Rates`]. Models never validate their inputs; negative
//! compartments produce mathematically defined (if unphysical) rates.
//!
//! # Models
//!
//! - [`zombie`] — S/Z/U/D outbreak, with ([`zombie::Recovering`]) and without
//!   ([`zombie::Basic`]) recovery of the undead
//! - [`epidemic`] — S/E/A/I/Q/H/R epidemic with quarantine and hospitalization
//!   ([`epidemic::Basic`]), plus the unspecified [`epidemic::Expanded`]
//! - [`behavior`] — zombie outbreak with quarantine capacity, public opinion,
//!   and socio-economic loss ([`behavior::Behavior`] and the earlier
//!   [`behavior::SharedRate`] revision)
//!
//! [`ModelKind`] selects among all of them by name and evaluates them through
//! the flat positional contract `f(t, y, params) -> dy`.
//!
//! # Features
//!
//! - `serde` — derives `Serialize`/`Deserialize` on every parameter struct.
//!
//! [`Compartmental`]: outbreak_core::Compartmental
//! [`Sample`]: outbreak_core::Sample
//! [`Rates`]: outbreak_core::Rates

pub mod behavior;
pub mod epidemic;
pub mod zombie;

mod catalog;
mod error;

pub use catalog::ModelKind;
pub use error::Error;
