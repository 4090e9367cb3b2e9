//! Epidemic with asymptomatic, quarantined, and hospitalized channels.
//!
//! [`Basic`] has seven compartments, in state order:
//!
//! | Index | Label | Meaning |
//! |---|---|---|
//! | 0 | `S` | susceptible |
//! | 1 | `E` | exposed |
//! | 2 | `A` | asymptomatic infected |
//! | 3 | `I` | symptomatic infected |
//! | 4 | `Q` | quarantined |
//! | 5 | `H` | hospitalized |
//! | 6 | `R` | removed (recovered or dead) |
//!
//! With force of infection `λ = β·(I + η_A·A + η_Q·Q + η_H·H)`:
//!
//! ```text
//! dS = −λ·S
//! dE =  λ·S − σ·E
//! dA =  q·σ·E − (g_A + d_A)·A
//! dI = (1 − q)·σ·E + v_Q·Q + v_H·H − (w_Q + w_H + g_I + d_I)·I
//! dQ =  w_Q·I − (v_Q + g_Q + d_Q)·Q
//! dH =  w_H·I − (v_H + g_H + d_H)·H
//! dR = (g_A + d_A)·A + (g_I + d_I)·I + (g_Q + d_Q)·Q + (g_H + d_H)·H
//! ```
//!
//! Every outflow reappears as an inflow elsewhere, so the rates sum to zero.
//!
//! [`Expanded`] reserves a ten-slot state for a closure/self-isolation
//! extension whose equations were never written down. Evaluating it fails
//! with [`Error::NotImplemented`].

use std::convert::Infallible;

use outbreak_core::{Compartmental, Model, Rates, Sample, State};

use crate::Error;

/// Compartment labels for [`Basic`], in state order.
pub const LABELS: [&str; 7] = ["S", "E", "A", "I", "Q", "H", "R"];

/// Compartment labels for [`Expanded`], in state order.
pub const EXPANDED_LABELS: [&str; 10] = ["S", "E", "A", "I", "Q", "H", "R", "x_s", "x_I", "L_s"];

/// Parameters of the basic epidemic model.
///
/// The positional order used by [`from_array`](Self::from_array) is the field
/// order below.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpidemicParams {
    /// Transmission rate.
    pub beta: f64,
    /// Relative infectiousness of asymptomatic cases.
    pub eta_a: f64,
    /// Relative infectiousness of quarantined cases.
    pub eta_q: f64,
    /// Relative infectiousness of hospitalized cases.
    pub eta_h: f64,
    /// Progression rate from exposed to infectious.
    pub sigma: f64,
    /// Fraction of exposed who become asymptomatic.
    pub q: f64,
    pub g_a: f64,
    pub g_i: f64,
    pub g_q: f64,
    pub g_h: f64,
    /// Quarantine rate of symptomatic cases.
    pub w_q: f64,
    /// Hospitalization rate of symptomatic cases.
    pub w_h: f64,
    /// Quarantine violation rate.
    pub v_q: f64,
    /// Hospital discharge rate back to symptomatic.
    pub v_h: f64,
    pub d_i: f64,
    pub d_a: f64,
    pub d_q: f64,
    pub d_h: f64,
}

impl EpidemicParams {
    /// Number of positional parameters.
    pub const LEN: usize = 18;

    /// Builds parameters from the positional order
    /// `(β, η_A, η_Q, η_H, σ, q, g_A, g_I, g_Q, g_H, w_Q, w_H, v_Q, v_H, d_I, d_A, d_Q, d_H)`.
    #[must_use]
    pub const fn from_array(
        [
            beta,
            eta_a,
            eta_q,
            eta_h,
            sigma,
            q,
            g_a,
            g_i,
            g_q,
            g_h,
            w_q,
            w_h,
            v_q,
            v_h,
            d_i,
            d_a,
            d_q,
            d_h,
        ]: [f64; 18],
    ) -> Self {
        Self {
            beta,
            eta_a,
            eta_q,
            eta_h,
            sigma,
            q,
            g_a,
            g_i,
            g_q,
            g_h,
            w_q,
            w_h,
            v_q,
            v_h,
            d_i,
            d_a,
            d_q,
            d_h,
        }
    }

    /// Returns the parameters in positional order.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 18] {
        [
            self.beta, self.eta_a, self.eta_q, self.eta_h, self.sigma, self.q, self.g_a, self.g_i,
            self.g_q, self.g_h, self.w_q, self.w_h, self.v_q, self.v_h, self.d_i, self.d_a,
            self.d_q, self.d_h,
        ]
    }

    /// Per-susceptible infection pressure `λ` for the given state.
    #[must_use]
    pub fn force_of_infection(&self, state: &State<7>) -> f64 {
        let [_, _, a, i, q, h, _] = *state.as_array();
        self.beta * (i + self.eta_a * a + self.eta_q * q + self.eta_h * h)
    }
}

/// The seven-compartment epidemic model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basic {
    params: EpidemicParams,
}

impl Basic {
    #[must_use]
    pub const fn new(params: EpidemicParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub const fn params(&self) -> &EpidemicParams {
        &self.params
    }
}

impl Model for Basic {
    type Input = Sample<7>;
    type Output = Rates<7>;
    type Error = Infallible;

    fn call(&self, input: &Sample<7>) -> Result<Rates<7>, Infallible> {
        let p = &self.params;
        let lambda = p.force_of_infection(&input.state);
        let [s, e, a, i, q, h, _r] = *input.state.as_array();

        // Removal flows out of each infectious compartment into R.
        let removed_a = (p.g_a + p.d_a) * a;
        let removed_i = (p.g_i + p.d_i) * i;
        let removed_q = (p.g_q + p.d_q) * q;
        let removed_h = (p.g_h + p.d_h) * h;

        Ok(Rates::new([
            -lambda * s,
            lambda * s - p.sigma * e,
            p.q * p.sigma * e - removed_a,
            (1.0 - p.q) * p.sigma * e + p.v_q * q + p.v_h * h
                - (p.w_q + p.w_h + p.g_i + p.d_i) * i,
            p.w_q * i - (p.v_q + p.g_q + p.d_q) * q,
            p.w_h * i - (p.v_h + p.g_h + p.d_h) * h,
            removed_a + removed_i + removed_q + removed_h,
        ]))
    }
}

impl Compartmental<7> for Basic {
    const LABELS: [&'static str; 7] = LABELS;
}

/// The expanded epidemic model with closure support, self-isolation, and
/// closure losses.
///
/// Only the state layout is known (see [`EXPANDED_LABELS`]). Every evaluation
/// returns [`Error::NotImplemented`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Expanded;

impl Expanded {
    /// Name used in [`Error::NotImplemented`].
    pub const NAME: &'static str = "corona_expanded";
}

impl Model for Expanded {
    type Input = Sample<10>;
    type Output = Rates<10>;
    type Error = Error;

    fn call(&self, _input: &Sample<10>) -> Result<Rates<10>, Error> {
        Err(Error::NotImplemented { model: Self::NAME })
    }
}

impl Compartmental<10> for Expanded {
    const LABELS: [&'static str; 10] = EXPANDED_LABELS;
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn params() -> EpidemicParams {
        EpidemicParams::from_array([
            0.5, 0.4, 0.1, 0.05, 0.2, 0.3, 0.1, 0.08, 0.09, 0.07, 0.15, 0.02, 0.01, 0.03, 0.004,
            0.001, 0.002, 0.01,
        ])
    }

    #[test]
    fn unseeded_population_does_not_move() {
        let model = Basic::new(params());
        let rates = model
            .rates(0.0, &State::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]))
            .unwrap();
        assert_eq!(rates, Rates::new([0.0; 7]));
    }

    #[test]
    fn force_of_infection_weights_each_channel() {
        let p = params();
        let state = State::new([0.9, 0.0, 2.0, 3.0, 5.0, 7.0, 0.0]);
        let expected = p.beta * (3.0 + p.eta_a * 2.0 + p.eta_q * 5.0 + p.eta_h * 7.0);
        assert_relative_eq!(p.force_of_infection(&state), expected);
    }

    #[test]
    fn matches_hand_computation() {
        let p = params();
        let model = Basic::new(p);
        let [s, e, a, i, q, h, r] = [0.8, 0.05, 0.03, 0.04, 0.02, 0.01, 0.05];
        let rates = model.rates(2.0, &State::new([s, e, a, i, q, h, r])).unwrap();

        let lambda = p.beta * (i + p.eta_a * a + p.eta_q * q + p.eta_h * h);
        assert_relative_eq!(rates[0], -lambda * s);
        assert_relative_eq!(rates[1], lambda * s - p.sigma * e);
        assert_relative_eq!(rates[2], p.q * p.sigma * e - (p.g_a + p.d_a) * a);
        assert_relative_eq!(
            rates[3],
            (1.0 - p.q) * p.sigma * e + p.v_q * q + p.v_h * h
                - (p.w_q + p.w_h + p.g_i + p.d_i) * i
        );
        assert_relative_eq!(rates[4], p.w_q * i - (p.v_q + p.g_q + p.d_q) * q);
        assert_relative_eq!(rates[5], p.w_h * i - (p.v_h + p.g_h + p.d_h) * h);
        assert_relative_eq!(
            rates[6],
            (p.g_a + p.d_a) * a + (p.g_i + p.d_i) * i + (p.g_q + p.d_q) * q + (p.g_h + p.d_h) * h
        );
    }

    #[test]
    fn rates_sum_to_zero() {
        let model = Basic::new(params());
        let rates = model
            .rates(0.0, &State::new([0.7, 0.1, 0.05, 0.05, 0.04, 0.03, 0.03]))
            .unwrap();
        assert_relative_eq!(rates.sum(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn positional_order_is_preserved() {
        let values: [f64; 18] = std::array::from_fn(|i| i as f64);
        let p = EpidemicParams::from_array(values);
        assert_relative_eq!(p.beta, 0.0);
        assert_relative_eq!(p.sigma, 4.0);
        assert_relative_eq!(p.w_q, 10.0);
        assert_relative_eq!(p.d_i, 14.0);
        assert_relative_eq!(p.d_h, 17.0);
        assert_eq!(p.to_array(), values);
    }

    #[test]
    fn expanded_fails_fast() {
        let err = Expanded.rates(0.0, &State::new([0.0; 10])).unwrap_err();
        assert_eq!(
            err,
            Error::NotImplemented {
                model: "corona_expanded"
            }
        );
        assert_eq!(Expanded::LABELS.len(), 10);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn params_round_trip_through_json() {
        let values: [f64; 18] = std::array::from_fn(|i| f64::from(i as u8 + 1) / 64.0);
        let p = EpidemicParams::from_array(values);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains(r#""beta":0.015625"#));
        let back: EpidemicParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_array(), values);
    }
}
