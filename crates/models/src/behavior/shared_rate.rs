use std::convert::Infallible;

use outbreak_core::{Compartmental, Model, Rates, Sample, State};

use super::{LABELS, Regime};

/// Parameters of the earlier behavioral revision.
///
/// The positional order used by [`from_array`](Self::from_array) is the field
/// order below.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SharedRateParams {
    pub alpha: f64,
    pub b: f64,
    pub m: f64,
    pub z: f64,
    pub r: f64,
    /// Zombie kill probability, also used as the learning rate of both
    /// support proportions.
    pub k: f64,
    pub q_max: f64,
    /// Reporting coefficient, applied only while the incentive is active.
    pub c: f64,
    pub eps_s: f64,
    pub eps_e: f64,
    pub mu: f64,
}

impl SharedRateParams {
    pub const LEN: usize = 11;

    /// Builds parameters from the positional order
    /// `(α, b, m, z, r, k, q_max, C, ε_S, ε_E, μ)`.
    #[must_use]
    pub const fn from_array(
        [alpha, b, m, z, r, k, q_max, c, eps_s, eps_e, mu]: [f64; 11],
    ) -> Self {
        Self {
            alpha,
            b,
            m,
            z,
            r,
            k,
            q_max,
            c,
            eps_s,
            eps_e,
            mu,
        }
    }

    #[must_use]
    pub const fn to_array(&self) -> [f64; 11] {
        [
            self.alpha, self.b, self.m, self.z, self.r, self.k, self.q_max, self.c, self.eps_s,
            self.eps_e, self.mu,
        ]
    }
}

/// The earlier revision of the behavioral model.
///
/// Same state layout as [`Behavior`](super::Behavior), with these differences:
///
/// - one rate `k` drives zombie kills and both opinion dynamics
/// - the quarantine admission rate is `C + x_E`, using the gated coefficient
/// - `x_E` is frozen (`dx_E = 0`) while quarantine is saturated
/// - loss accrues as `dL = α·C − μ·L`
///
/// # Saturated quarantine sign
///
/// While saturated this revision uses `dQ = r·Q − z·Q`, so recovery *adds* to
/// the quarantined population while also adding `r·Q` to `S`. The canonical
/// model uses `dQ = −r·Q − z·Q`. The term is reproduced here unchanged so that
/// trajectories from the earlier revision can be regenerated; prefer
/// [`Behavior`](super::Behavior) for new work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharedRate {
    params: SharedRateParams,
}

impl SharedRate {
    #[must_use]
    pub const fn new(params: SharedRateParams) -> Self {
        Self { params }
    }

    #[must_use]
    pub const fn params(&self) -> &SharedRateParams {
        &self.params
    }

    #[must_use]
    pub fn regime(&self, state: &State<8>) -> Regime {
        Regime::classify(state[3], self.params.q_max, state[5])
    }

    /// Evaluates the rates under an explicit regime.
    #[must_use]
    pub fn rates_in(&self, regime: Regime, state: &State<8>) -> Rates<8> {
        let p = &self.params;
        let [s, zombies, e, q, _d, x_s, x_e, loss] = *state.as_array();
        let c = regime.coefficient(p.c);
        let infection = p.alpha * s * zombies;

        let (d_e, d_q, d_x_e) = if regime.admission_open {
            let admitted = e * (c + x_e);
            (
                infection - p.z * e - p.r * e - admitted - c * e,
                admitted - p.r * q - p.z * q,
                p.k * x_e * (1.0 - x_e) * ((p.z - p.r) * (e + q) - p.eps_e),
            )
        } else {
            (infection - p.z * e - p.r * e - c * e, p.r * q - p.z * q, 0.0)
        };

        Rates::new([
            p.b * s - p.m * s - infection + p.r * (q + e),
            p.z * e - p.k * s * zombies,
            d_e,
            d_q,
            p.k * s * zombies + p.m * s + p.z * q + c * e,
            p.k * x_s * (1.0 - x_s) * (zombies + q - p.eps_s * loss),
            d_x_e,
            p.alpha * c - p.mu * loss,
        ])
    }
}

impl Model for SharedRate {
    type Input = Sample<8>;
    type Output = Rates<8>;
    type Error = Infallible;

    fn call(&self, input: &Sample<8>) -> Result<Rates<8>, Infallible> {
        let regime = self.regime(&input.state);
        Ok(self.rates_in(regime, &input.state))
    }
}

impl Compartmental<8> for SharedRate {
    const LABELS: [&'static str; 8] = LABELS;
}
