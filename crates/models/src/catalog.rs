use std::convert::Infallible;

use outbreak_core::{Compartmental, State};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{
    Error,
    behavior::{self, BehaviorParams, SharedRateParams},
    epidemic::{self, EpidemicParams},
    zombie::{self, ZombieParams},
};

/// Every named model, selectable at runtime.
///
/// Each revision is its own variant, so picking a model by name can never
/// silently resolve to a different parameterization. The string form is the
/// model's snake-case name, e.g. `"zombie_human_behavior"`.
///
/// [`evaluate`](Self::evaluate) exposes the flat positional contract
/// `f(t, y, params) -> dy` used by generic integrators and scripts; typed
/// callers should construct the model types directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum ModelKind {
    /// [`zombie::Recovering`], parameters `(α, b, m, z, r, k)`.
    #[strum(serialize = "d_zombie")]
    ZombieRecovering,

    /// [`zombie::Basic`], parameters `(b, m, α, z, k)`.
    #[strum(serialize = "d_zombie_basic")]
    ZombieBasic,

    /// [`epidemic::Basic`], 18 parameters.
    #[strum(serialize = "corona_basic")]
    Epidemic,

    /// [`epidemic::Expanded`]; always fails with [`Error::NotImplemented`].
    #[strum(serialize = "corona_expanded")]
    EpidemicExpanded,

    /// [`behavior::Behavior`], 14 parameters.
    #[strum(serialize = "zombie_human_behavior")]
    Behavior,

    /// [`behavior::SharedRate`], 11 parameters.
    #[strum(serialize = "zombie_human_behavior_shared")]
    BehaviorSharedRate,
}

impl ModelKind {
    /// The model's snake-case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Length of the state vector.
    #[must_use]
    pub const fn state_len(self) -> usize {
        self.labels().len()
    }

    /// Number of positional parameters, or `None` if the model is unspecified.
    #[must_use]
    pub const fn param_len(self) -> Option<usize> {
        match self {
            Self::ZombieRecovering => Some(ZombieParams::LEN),
            Self::ZombieBasic => Some(5),
            Self::Epidemic => Some(EpidemicParams::LEN),
            Self::EpidemicExpanded => None,
            Self::Behavior => Some(BehaviorParams::LEN),
            Self::BehaviorSharedRate => Some(SharedRateParams::LEN),
        }
    }

    /// State slot labels, in order.
    #[must_use]
    pub const fn labels(self) -> &'static [&'static str] {
        match self {
            Self::ZombieRecovering | Self::ZombieBasic => &zombie::LABELS,
            Self::Epidemic => &epidemic::LABELS,
            Self::EpidemicExpanded => &epidemic::EXPANDED_LABELS,
            Self::Behavior | Self::BehaviorSharedRate => &behavior::LABELS,
        }
    }

    /// Evaluates the model's rates at `(t, y)` with positional parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StateLength`] or [`Error::ParamLength`] if `y` or
    /// `params` has the wrong length, and [`Error::NotImplemented`] for
    /// [`ModelKind::EpidemicExpanded`].
    pub fn evaluate(self, t: f64, y: &[f64], params: &[f64]) -> Result<Vec<f64>, Error> {
        match self {
            Self::ZombieRecovering => {
                let params = ZombieParams::from_array(self.params(params)?);
                let state: [f64; 4] = self.state(y)?;
                rates(&zombie::Recovering::new(params), t, state)
            }
            Self::ZombieBasic => {
                let params = ZombieParams::from_basic_order(self.params(params)?);
                let state: [f64; 4] = self.state(y)?;
                rates(&zombie::Basic::new(params), t, state)
            }
            Self::Epidemic => {
                let params = EpidemicParams::from_array(self.params(params)?);
                let state: [f64; 7] = self.state(y)?;
                rates(&epidemic::Basic::new(params), t, state)
            }
            Self::EpidemicExpanded => {
                let state: [f64; 10] = self.state(y)?;
                let rates = epidemic::Expanded.rates(t, &State::new(state))?;
                Ok(rates.as_array().to_vec())
            }
            Self::Behavior => {
                let params = BehaviorParams::from_array(self.params(params)?);
                let state: [f64; 8] = self.state(y)?;
                rates(&behavior::Behavior::new(params), t, state)
            }
            Self::BehaviorSharedRate => {
                let params = SharedRateParams::from_array(self.params(params)?);
                let state: [f64; 8] = self.state(y)?;
                rates(&behavior::SharedRate::new(params), t, state)
            }
        }
    }

    fn state<const N: usize>(self, y: &[f64]) -> Result<[f64; N], Error> {
        y.try_into().map_err(|_| Error::StateLength {
            model: self.name(),
            expected: N,
            actual: y.len(),
        })
    }

    fn params<const P: usize>(self, params: &[f64]) -> Result<[f64; P], Error> {
        params.try_into().map_err(|_| Error::ParamLength {
            model: self.name(),
            expected: P,
            actual: params.len(),
        })
    }
}

fn rates<M, const N: usize>(model: &M, t: f64, y: [f64; N]) -> Result<Vec<f64>, Error>
where
    M: Compartmental<N, Error = Infallible>,
{
    let Ok(rates) = model.rates(t, &State::new(y));
    Ok(rates.as_array().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use approx::assert_relative_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn names_round_trip() {
        for kind in ModelKind::iter() {
            assert_eq!(ModelKind::from_str(kind.name()), Ok(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
        assert!(ModelKind::from_str("zombie").is_err());
    }

    #[test]
    fn labels_match_state_lengths() {
        assert_eq!(ModelKind::ZombieRecovering.state_len(), 4);
        assert_eq!(ModelKind::Epidemic.state_len(), 7);
        assert_eq!(ModelKind::EpidemicExpanded.state_len(), 10);
        assert_eq!(ModelKind::Behavior.state_len(), 8);
        assert_eq!(ModelKind::BehaviorSharedRate.labels()[5], "x_S");
    }

    #[test]
    fn basic_zombie_scenario() {
        let rates = ModelKind::ZombieBasic
            .evaluate(0.0, &[10.0, 0.0, 0.0, 0.0], &[0.0; 5])
            .unwrap();
        assert_eq!(rates, vec![0.0; 4]);
    }

    #[test]
    fn basic_zombie_takes_legacy_order() {
        // (b, m, α, z, k): only α is nonzero.
        let rates = ModelKind::ZombieBasic
            .evaluate(0.0, &[10.0, 2.0, 0.0, 0.0], &[0.0, 0.0, 0.5, 0.0, 0.0])
            .unwrap();
        assert_relative_eq!(rates[0], -10.0);
        assert_relative_eq!(rates[2], 10.0);
    }

    #[test]
    fn recovering_zombie_takes_canonical_order() {
        // (α, b, m, z, r, k): only r is nonzero.
        let rates = ModelKind::ZombieRecovering
            .evaluate(0.0, &[0.0, 0.0, 4.0, 0.0], &[0.0, 0.0, 0.0, 0.0, 0.25, 0.0])
            .unwrap();
        assert_eq!(rates, vec![1.0, 0.0, -1.0, 0.0]);
    }

    #[test]
    fn behavior_scenario_reports_at_capacity() {
        let mut params = [0.0; 14];
        params[6] = 5.0; // q_max
        params[7] = 0.3; // C₀
        params[11] = 1.0; // l_S

        let supported = ModelKind::Behavior
            .evaluate(0.0, &[0.0, 0.0, 0.0, 5.0, 0.0, 0.6, 0.0, 0.0], &params)
            .unwrap();
        assert_relative_eq!(supported[7], 0.3);

        let opposed = ModelKind::Behavior
            .evaluate(0.0, &[0.0, 0.0, 0.0, 5.0, 0.0, 0.4, 0.0, 0.0], &params)
            .unwrap();
        assert_relative_eq!(opposed[7], 0.0);
    }

    #[test]
    fn wrong_lengths_are_rejected() {
        let err = ModelKind::Epidemic.evaluate(0.0, &[1.0; 6], &[0.0; 18]).unwrap_err();
        assert_eq!(
            err,
            Error::StateLength {
                model: "corona_basic",
                expected: 7,
                actual: 6
            }
        );

        let err = ModelKind::Behavior.evaluate(0.0, &[0.0; 8], &[0.0; 11]).unwrap_err();
        assert_eq!(
            err,
            Error::ParamLength {
                model: "zombie_human_behavior",
                expected: 14,
                actual: 11
            }
        );
    }

    #[test]
    fn expanded_epidemic_is_not_implemented() {
        assert_eq!(ModelKind::EpidemicExpanded.param_len(), None);
        let err = ModelKind::EpidemicExpanded
            .evaluate(0.0, &[0.0; 10], &[])
            .unwrap_err();
        assert!(matches!(err, Error::NotImplemented { .. }));
        assert!(err.to_string().contains("corona_expanded"));
    }
}
