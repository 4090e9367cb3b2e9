//! Zombie outbreak with quarantine capacity and behavioral feedback.
//!
//! Eight state slots, in order:
//!
//! | Index | Label | Meaning |
//! |---|---|---|
//! | 0 | `S` | susceptible humans |
//! | 1 | `Z` | zombies |
//! | 2 | `E` | exposed: bitten, not yet turned |
//! | 3 | `Q` | quarantined exposed |
//! | 4 | `D` | dead |
//! | 5 | `x_S` | share of susceptibles supporting lethal action |
//! | 6 | `x_E` | share of exposed willing to self-report |
//! | 7 | `L` | accumulated socio-economic loss |
//!
//! # Modes
//!
//! Each evaluation derives a [`Regime`] from the current state:
//!
//! - *admission open* while `Q < q_max`; exposed individuals enter quarantine
//!   at rate `C₀ + x_E`
//! - *reporting incentive* while `Q ≥ q_max` and `x_S ≥ 0.5`; exposed
//!   individuals are reported and killed at rate `C = C₀`, otherwise `C = 0`
//!
//! ```text
//! admission open:  dE = α·S·Z − z·E − r·E − E·(C₀ + x_E) − C·E
//!                  dQ = E·(C₀ + x_E) − r·Q − z·Q
//! saturated:       dE = α·S·Z − z·E − r·E − C·E
//!                  dQ = −r·Q − z·Q
//!
//! dS   = b·S − m·S − α·S·Z + r·(Q + E)
//! dZ   = z·E − k·S·Z
//! dD   = k·S·Z + m·S + z·Q + C·E
//! dx_S = k_S·x_S·(1 − x_S)·(Z + Q − ε_S·L)
//! dx_E = k_E·x_E·(1 − x_E)·((z − r)·(E + Q) − ε_E)
//! dL   = l_S·C − μ·L
//! ```
//!
//! `x_S` and `x_E` follow logistic opinion dynamics and are not clamped. They
//! stay within `[0, 1]` only as long as the integrator's steps are small
//! relative to the drive terms; coarse steps can carry them past the bounds.
//!
//! [`SharedRate`] is the earlier revision of the same model.

mod regime;
mod shared_rate;

pub use regime::{MAJORITY, Regime};
pub use shared_rate::{SharedRate, SharedRateParams};

use std::convert::Infallible;

use outbreak_core::{Compartmental, Model, Rates, Sample, State};

/// Slot labels in state order.
pub const LABELS: [&str; 8] = ["S", "Z", "E", "Q", "D", "x_S", "x_E", "L"];

/// Parameters of the behavioral model.
///
/// The positional order used by [`from_array`](Self::from_array) is the field
/// order below.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorParams {
    /// Infection probability per human–zombie encounter.
    pub alpha: f64,
    /// Natural birth rate.
    pub b: f64,
    /// Natural death probability.
    pub m: f64,
    /// Zombification probability once exposed.
    pub z: f64,
    /// Recovery probability.
    pub r: f64,
    /// Probability that a human kills a zombie.
    pub k: f64,
    /// Quarantine capacity.
    pub q_max: f64,
    /// Share of exposed found out by the rest of the population.
    pub c0: f64,
    /// Sensitivity of support to socio-economic loss.
    pub eps_s: f64,
    /// Sensitivity of self-reporting to social pressure.
    pub eps_e: f64,
    /// Decay rate of socio-economic loss.
    pub mu: f64,
    /// Loss incurred per unit of lethal reporting.
    pub l_s: f64,
    /// Learning rate of susceptibles.
    pub k_s: f64,
    /// Learning rate of the exposed.
    pub k_e: f64,
}

impl BehaviorParams {
    pub const LEN: usize = 14;

    /// Builds parameters from the positional order
    /// `(α, b, m, z, r, k, q_max, C₀, ε_S, ε_E, μ, l_S, k_S, k_E)`.
    #[must_use]
    pub const fn from_array(
        [alpha, b, m, z, r, k, q_max, c0, eps_s, eps_e, mu, l_s, k_s, k_e]: [f64; 14],
    ) -> Self {
        Self {
            alpha,
            b,
            m,
            z,
            r,
            k,
            q_max,
            c0,
            eps_s,
            eps_e,
            mu,
            l_s,
            k_s,
            k_e,
        }
    }

    #[must_use]
    pub const fn to_array(&self) -> [f64; 14] {
        [
            self.alpha, self.b, self.m, self.z, self.r, self.k, self.q_max, self.c0, self.eps_s,
            self.eps_e, self.mu, self.l_s, self.k_s, self.k_e,
        ]
    }
}

/// The behavioral zombie model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Behavior {
    params: BehaviorParams,
}

impl Behavior {
    #[must_use]
    pub const fn new(params: BehaviorParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub const fn params(&self) -> &BehaviorParams {
        &self.params
    }

    /// The regime the model is in at `state`.
    #[must_use]
    pub fn regime(&self, state: &State<8>) -> Regime {
        Regime::classify(state[3], self.params.q_max, state[5])
    }

    /// Evaluates the rates under an explicit regime instead of the one the
    /// state implies.
    #[must_use]
    pub fn rates_in(&self, regime: Regime, state: &State<8>) -> Rates<8> {
        let p = &self.params;
        let [s, zombies, e, q, _d, x_s, x_e, loss] = *state.as_array();
        let c = regime.coefficient(p.c0);
        let infection = p.alpha * s * zombies;

        let (d_e, d_q) = if regime.admission_open {
            let admitted = e * (p.c0 + x_e);
            (
                infection - p.z * e - p.r * e - admitted - c * e,
                admitted - p.r * q - p.z * q,
            )
        } else {
            (infection - p.z * e - p.r * e - c * e, -p.r * q - p.z * q)
        };

        Rates::new([
            p.b * s - p.m * s - infection + p.r * (q + e),
            p.z * e - p.k * s * zombies,
            d_e,
            d_q,
            p.k * s * zombies + p.m * s + p.z * q + c * e,
            p.k_s * x_s * (1.0 - x_s) * (zombies + q - p.eps_s * loss),
            p.k_e * x_e * (1.0 - x_e) * ((p.z - p.r) * (e + q) - p.eps_e),
            p.l_s * c - p.mu * loss,
        ])
    }
}

impl Model for Behavior {
    type Input = Sample<8>;
    type Output = Rates<8>;
    type Error = Infallible;

    fn call(&self, input: &Sample<8>) -> Result<Rates<8>, Infallible> {
        let regime = self.regime(&input.state);
        Ok(self.rates_in(regime, &input.state))
    }
}

impl Compartmental<8> for Behavior {
    const LABELS: [&'static str; 8] = LABELS;
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn params() -> BehaviorParams {
        BehaviorParams {
            alpha: 0.0095,
            b: 0.0001,
            m: 0.0001,
            z: 0.2,
            r: 0.05,
            k: 0.005,
            q_max: 5.0,
            c0: 0.3,
            eps_s: 0.1,
            eps_e: 0.2,
            mu: 0.05,
            l_s: 2.0,
            k_s: 0.4,
            k_e: 0.6,
        }
    }

    fn state(q: f64, x_s: f64) -> State<8> {
        State::new([500.0, 3.0, 4.0, q, 0.0, x_s, 0.3, 1.5])
    }

    #[test]
    fn regime_follows_state() {
        let model = Behavior::new(params());
        assert_eq!(model.regime(&state(4.0, 0.9)), Regime::new(false, true));
        assert_eq!(model.regime(&state(5.0, 0.4)), Regime::new(false, false));
        assert_eq!(model.regime(&state(5.0, 0.6)), Regime::new(true, false));
    }

    #[test]
    fn open_admission_without_incentive() {
        let p = params();
        let y = state(4.0, 0.3);
        let rates = Behavior::new(p).rates_in(Regime::new(false, true), &y);

        let [s, zombies, e, q, _, _, x_e, loss] = *y.as_array();
        let admitted = e * (p.c0 + x_e);
        assert_relative_eq!(rates[2], p.alpha * s * zombies - p.z * e - p.r * e - admitted);
        assert_relative_eq!(rates[3], admitted - p.r * q - p.z * q);
        assert_relative_eq!(rates[4], p.k * s * zombies + p.m * s + p.z * q);
        assert_relative_eq!(rates[7], -p.mu * loss);
    }

    #[test]
    fn saturated_without_incentive() {
        let p = params();
        let y = state(6.0, 0.3);
        let rates = Behavior::new(p).rates_in(Regime::new(false, false), &y);

        let [s, zombies, e, q, _, _, _, loss] = *y.as_array();
        assert_relative_eq!(rates[2], p.alpha * s * zombies - p.z * e - p.r * e);
        assert_relative_eq!(rates[3], -p.r * q - p.z * q);
        assert_relative_eq!(rates[4], p.k * s * zombies + p.m * s + p.z * q);
        assert_relative_eq!(rates[7], -p.mu * loss);
    }

    #[test]
    fn saturated_with_incentive() {
        let p = params();
        let y = state(6.0, 0.7);
        let rates = Behavior::new(p).rates_in(Regime::new(true, false), &y);

        let [s, zombies, e, q, _, _, _, loss] = *y.as_array();
        assert_relative_eq!(rates[2], p.alpha * s * zombies - p.z * e - p.r * e - p.c0 * e);
        assert_relative_eq!(rates[3], -p.r * q - p.z * q);
        assert_relative_eq!(rates[4], p.k * s * zombies + p.m * s + p.z * q + p.c0 * e);
        assert_relative_eq!(rates[7], p.l_s * p.c0 - p.mu * loss);
    }

    #[test]
    fn open_admission_with_incentive() {
        // Not reachable from a state, but the equations are still defined.
        let p = params();
        let y = state(4.0, 0.7);
        let rates = Behavior::new(p).rates_in(Regime::new(true, true), &y);

        let [s, zombies, e, q, _, _, x_e, loss] = *y.as_array();
        let admitted = e * (p.c0 + x_e);
        assert_relative_eq!(
            rates[2],
            p.alpha * s * zombies - p.z * e - p.r * e - admitted - p.c0 * e
        );
        assert_relative_eq!(rates[3], admitted - p.r * q - p.z * q);
        assert_relative_eq!(rates[7], p.l_s * p.c0 - p.mu * loss);
    }

    #[test]
    fn unconditional_rates_ignore_regime() {
        let p = params();
        let y = state(6.0, 0.7);
        let model = Behavior::new(p);
        let [s, zombies, e, q, _, x_s, x_e, loss] = *y.as_array();

        for regime in Regime::ALL {
            let rates = model.rates_in(regime, &y);
            assert_relative_eq!(rates[0], p.b * s - p.m * s - p.alpha * s * zombies + p.r * (q + e));
            assert_relative_eq!(rates[1], p.z * e - p.k * s * zombies);
            assert_relative_eq!(
                rates[5],
                p.k_s * x_s * (1.0 - x_s) * (zombies + q - p.eps_s * loss)
            );
            assert_relative_eq!(
                rates[6],
                p.k_e * x_e * (1.0 - x_e) * ((p.z - p.r) * (e + q) - p.eps_e)
            );
        }
    }

    #[test]
    fn capacity_boundary_is_discontinuous() {
        let p = params();
        let model = Behavior::new(p);
        let eps = 1e-9;
        let below = state(p.q_max - eps, 0.3);
        let above = state(p.q_max + eps, 0.3);

        let r_below = model.call(&Sample::new(0.0, below)).unwrap();
        let r_above = model.call(&Sample::new(0.0, above)).unwrap();

        let [_, _, e, _, _, _, x_e, _] = *below.as_array();
        let admitted = e * (p.c0 + x_e);
        // Admission flow vanishes; the q·(r + z) terms differ by only 2·eps·(r + z).
        assert_relative_eq!(r_above[2] - r_below[2], admitted, epsilon = 1e-9);
        assert_relative_eq!(r_below[3] - r_above[3], admitted, epsilon = 1e-9);
    }

    #[test]
    fn majority_sweep_at_capacity() {
        let p = params();
        let model = Behavior::new(p);
        let loss = 1.5;
        for (x_s, expected_c) in [(0.49, 0.0), (0.5, p.c0), (0.51, p.c0)] {
            let rates = model.call(&Sample::new(0.0, state(p.q_max, x_s))).unwrap();
            assert_relative_eq!(rates[7], p.l_s * expected_c - p.mu * loss);
        }
        for x_s in [0.49, 0.5, 0.51] {
            let rates = model.call(&Sample::new(0.0, state(p.q_max - 1.0, x_s))).unwrap();
            assert_relative_eq!(rates[7], -p.mu * loss);
        }
    }

    #[test]
    fn positional_order_is_preserved() {
        let values: [f64; 14] = std::array::from_fn(|i| i as f64 + 1.0);
        let p = BehaviorParams::from_array(values);
        assert_relative_eq!(p.q_max, 7.0);
        assert_relative_eq!(p.c0, 8.0);
        assert_relative_eq!(p.k_e, 14.0);
        assert_eq!(p.to_array(), values);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn params_round_trip_through_json() {
        let values: [f64; 14] = std::array::from_fn(|i| f64::from(i as u8) / 8.0);
        let p = BehaviorParams::from_array(values);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains(r#""q_max":0.75"#));
        let back: BehaviorParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
