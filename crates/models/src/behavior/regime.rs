/// Support for lethal action above which the reporting incentive can switch on.
pub const MAJORITY: f64 = 0.5;

/// The two discrete modes of the behavioral model at one instant.
///
/// Both flags are derived from the instantaneous state on every evaluation;
/// nothing is remembered between calls. Crossing `Q = q_max` switches both
/// flags at once, so the rates are discontinuous there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Regime {
    /// Quarantine is saturated and a majority supports lethal action, so
    /// exposed individuals are reported and killed at rate `C₀`.
    pub reporting_incentive: bool,
    /// Quarantine has room (`Q < q_max`) and admits exposed individuals.
    pub admission_open: bool,
}

impl Regime {
    /// Every flag combination, including the one [`classify`](Self::classify)
    /// never produces.
    pub const ALL: [Self; 4] = [
        Self::new(false, true),
        Self::new(false, false),
        Self::new(true, false),
        Self::new(true, true),
    ];

    #[must_use]
    pub const fn new(reporting_incentive: bool, admission_open: bool) -> Self {
        Self {
            reporting_incentive,
            admission_open,
        }
    }

    /// Derives the regime from the quarantined population `q`, the capacity
    /// `q_max`, and the support proportion `x_s`.
    ///
    /// A `NaN` in any argument yields a closed quarantine with no incentive.
    #[must_use]
    pub fn classify(q: f64, q_max: f64, x_s: f64) -> Self {
        let saturated = q >= q_max;
        Self {
            reporting_incentive: saturated && x_s >= MAJORITY,
            admission_open: q < q_max,
        }
    }

    /// The reporting coefficient `C`: `c0` while the incentive is active, zero otherwise.
    #[must_use]
    pub fn coefficient(self, c0: f64) -> f64 {
        if self.reporting_incentive { c0 } else { 0.0 }
    }

    /// Returns `false` for the incentive-with-open-admission combination,
    /// which needs `Q` both below and at-or-above capacity.
    #[must_use]
    pub const fn is_reachable(self) -> bool {
        !(self.reporting_incentive && self.admission_open)
    }
}
