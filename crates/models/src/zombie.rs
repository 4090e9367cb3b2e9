//! The basic zombie outbreak.
//!
//! Four compartments, in state order:
//!
//! | Index | Label | Meaning |
//! |---|---|---|
//! | 0 | `S` | susceptible humans |
//! | 1 | `Z` | zombies |
//! | 2 | `U` | undead: bitten, not yet turned |
//! | 3 | `D` | dead, removed for good |
//!
//! ```text
//! dS = (b − m − α·Z)·S + r·U
//! dZ = z·U − k·S·Z
//! dU = α·S·Z − z·U − r·U
//! dD = (k·Z + m)·S
//! ```
//!
//! Two revisions of the model exist and both are kept as distinct types:
//! [`Recovering`] includes the `r·U` recovery flow; [`Basic`] omits it. They
//! share [`ZombieParams`], whose canonical positional order is
//! `(α, b, m, z, r, k)`. The no-recovery revision took its parameters as
//! `(b, m, α, z, k)`; [`ZombieParams::from_basic_order`] accepts that order.

use std::convert::Infallible;

use outbreak_core::{Compartmental, Model, Rates, Sample};

/// Compartment labels in state order.
pub const LABELS: [&str; 4] = ["S", "Z", "U", "D"];

/// Rates shared by both zombie model revisions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZombieParams {
    /// Infection probability per human–zombie encounter.
    pub alpha: f64,
    /// Natural birth rate per individual.
    pub b: f64,
    /// Natural death probability per individual.
    pub m: f64,
    /// Zombification probability for the undead.
    pub z: f64,
    /// Recovery probability for the undead. Ignored by [`Basic`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub r: f64,
    /// Probability that a human kills a zombie in an encounter.
    pub k: f64,
}

impl ZombieParams {
    /// Number of positional parameters in canonical order.
    pub const LEN: usize = 6;

    /// Builds parameters from the canonical order `(α, b, m, z, r, k)`.
    #[must_use]
    pub const fn from_array([alpha, b, m, z, r, k]: [f64; 6]) -> Self {
        Self {
            alpha,
            b,
            m,
            z,
            r,
            k,
        }
    }

    /// Returns the parameters in canonical order `(α, b, m, z, r, k)`.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 6] {
        [self.alpha, self.b, self.m, self.z, self.r, self.k]
    }

    /// Builds parameters from the no-recovery revision's order `(b, m, α, z, k)`.
    ///
    /// The recovery probability is set to zero.
    #[must_use]
    pub const fn from_basic_order([b, m, alpha, z, k]: [f64; 5]) -> Self {
        Self {
            alpha,
            b,
            m,
            z,
            r: 0.0,
            k,
        }
    }

    /// Returns the parameters in the no-recovery revision's order `(b, m, α, z, k)`.
    #[must_use]
    pub const fn to_basic_order(&self) -> [f64; 5] {
        [self.b, self.m, self.alpha, self.z, self.k]
    }
}

/// Zombie outbreak in which the undead may recover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recovering {
    params: ZombieParams,
}

/// Zombie outbreak without recovery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basic {
    params: ZombieParams,
}

impl Recovering {
    #[must_use]
    pub const fn new(params: ZombieParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub const fn params(&self) -> &ZombieParams {
        &self.params
    }
}

impl Basic {
    #[must_use]
    pub const fn new(params: ZombieParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub const fn params(&self) -> &ZombieParams {
        &self.params
    }
}

fn zombie_rates(p: &ZombieParams, recovery: f64, y: &[f64; 4]) -> [f64; 4] {
    let [s, z, u, _d] = *y;
    [
        (p.b - p.m - p.alpha * z) * s + recovery * u,
        p.z * u - p.k * s * z,
        p.alpha * s * z - p.z * u - recovery * u,
        (p.k * z + p.m) * s,
    ]
}

impl Model for Recovering {
    type Input = Sample<4>;
    type Output = Rates<4>;
    type Error = Infallible;

    fn call(&self, input: &Sample<4>) -> Result<Rates<4>, Infallible> {
        let rates = zombie_rates(&self.params, self.params.r, input.state.as_array());
        Ok(Rates::new(rates))
    }
}

impl Model for Basic {
    type Input = Sample<4>;
    type Output = Rates<4>;
    type Error = Infallible;

    fn call(&self, input: &Sample<4>) -> Result<Rates<4>, Infallible> {
        let rates = zombie_rates(&self.params, 0.0, input.state.as_array());
        Ok(Rates::new(rates))
    }
}

impl Compartmental<4> for Recovering {
    const LABELS: [&'static str; 4] = LABELS;
}

impl Compartmental<4> for Basic {
    const LABELS: [&'static str; 4] = LABELS;
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use outbreak_core::State;

    fn params() -> ZombieParams {
        ZombieParams::from_array([0.005, 0.0001, 0.0001, 0.01, 0.02, 0.004])
    }

    #[test]
    fn all_zero_rates_are_a_fixed_point() {
        let model = Basic::new(ZombieParams::from_basic_order([0.0; 5]));
        let rates = model.rates(0.0, &State::new([10.0, 0.0, 0.0, 0.0])).unwrap();
        assert_eq!(rates, Rates::new([0.0; 4]));

        let model = Recovering::new(ZombieParams::default());
        let rates = model.rates(3.0, &State::new([10.0, 5.0, 2.0, 1.0])).unwrap();
        assert_eq!(rates, Rates::new([0.0; 4]));
    }

    #[test]
    fn recovering_matches_hand_computation() {
        let model = Recovering::new(params());
        let [s, z, u] = [500.0, 2.0, 10.0];
        let rates = model.rates(0.0, &State::new([s, z, u, 0.0])).unwrap();

        let p = params();
        assert_relative_eq!(rates[0], (p.b - p.m - p.alpha * z) * s + p.r * u);
        assert_relative_eq!(rates[1], p.z * u - p.k * s * z);
        assert_relative_eq!(rates[2], p.alpha * s * z - p.z * u - p.r * u);
        assert_relative_eq!(rates[3], (p.k * z + p.m) * s);
    }

    #[test]
    fn basic_ignores_recovery() {
        let state = State::new([500.0, 2.0, 10.0, 3.0]);
        let with_r = Basic::new(params()).rates(0.0, &state).unwrap();
        let without_r = Basic::new(ZombieParams { r: 0.0, ..params() })
            .rates(0.0, &state)
            .unwrap();
        assert_eq!(with_r, without_r);

        let recovering = Recovering::new(params()).rates(0.0, &state).unwrap();
        assert_relative_eq!(recovering[0] - with_r[0], params().r * 10.0);
        assert_relative_eq!(recovering[2] - with_r[2], -params().r * 10.0);
    }

    #[test]
    fn dead_compartment_does_not_feed_back() {
        let model = Recovering::new(params());
        let a = model.rates(0.0, &State::new([100.0, 1.0, 1.0, 0.0])).unwrap();
        let b = model.rates(0.0, &State::new([100.0, 1.0, 1.0, 1e6])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn basic_order_round_trips_through_canonical_fields() {
        let p = ZombieParams::from_basic_order([1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_relative_eq!(p.b, 1.0);
        assert_relative_eq!(p.m, 2.0);
        assert_relative_eq!(p.alpha, 3.0);
        assert_relative_eq!(p.z, 4.0);
        assert_relative_eq!(p.k, 5.0);
        assert_relative_eq!(p.r, 0.0);
        assert_eq!(p.to_basic_order(), [1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(p.to_array(), [3.0, 1.0, 2.0, 4.0, 0.0, 5.0]);
    }

    #[test]
    fn negative_compartments_are_not_rejected() {
        let model = Recovering::new(params());
        let rates = model.rates(0.0, &State::new([-1.0, -1.0, -1.0, -1.0])).unwrap();
        assert!(rates.is_finite());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn params_round_trip_through_json() {
        let p = ZombieParams::from_array([0.5, 0.25, 0.125, 0.0625, 0.75, 0.375]);
        let json = serde_json::to_string(&p).unwrap();
        let back: ZombieParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn recovery_defaults_to_zero_when_absent() {
        let json = r#"{"alpha": 0.5, "b": 0.25, "m": 0.125, "z": 0.0625, "k": 0.375}"#;
        let p: ZombieParams = serde_json::from_str(json).unwrap();
        assert_eq!(p.r, 0.0);
        assert_eq!(p, ZombieParams::from_basic_order([0.25, 0.125, 0.5, 0.0625, 0.375]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn other_fields_are_required() {
        let json = r#"{"alpha": 0.5, "b": 0.25, "m": 0.125, "r": 0.75, "k": 0.375}"#;
        assert!(serde_json::from_str::<ZombieParams>(json).is_err());
    }
}
