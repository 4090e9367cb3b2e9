use thiserror::Error;

/// Configuration for the Dormand–Prince solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    rel_tol: f64,
    abs_tol: f64,
    initial_step: Option<f64>,
    min_step: f64,
    max_step: f64,
    max_steps: usize,
}

/// Errors that can occur when validating a Dormand–Prince config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rel_tol must be finite and positive")]
    RelTol,

    #[error("abs_tol must be finite and positive")]
    AbsTol,

    #[error("initial_step must be finite and positive")]
    InitialStep,

    #[error("min_step must be finite and positive")]
    MinStep,

    #[error("max_step must not be smaller than min_step")]
    MaxStep,

    #[error("max_steps must be at least 1")]
    MaxSteps,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rel_tol: 1e-6,
            abs_tol: 1e-9,
            initial_step: None,
            min_step: 1e-12,
            max_step: f64::INFINITY,
            max_steps: 100_000,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances and step bounds.
    ///
    /// `initial_step` of `None` lets the solver pick a first step from the
    /// integration span.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance or step bound is non-positive or
    /// non-finite (`max_step` may be infinite), if `max_step < min_step`, or
    /// if `max_steps` is zero.
    pub fn new(
        rel_tol: f64,
        abs_tol: f64,
        initial_step: Option<f64>,
        min_step: f64,
        max_step: f64,
        max_steps: usize,
    ) -> Result<Self, ConfigError> {
        if !rel_tol.is_finite() || rel_tol <= 0.0 {
            return Err(ConfigError::RelTol);
        }
        if !abs_tol.is_finite() || abs_tol <= 0.0 {
            return Err(ConfigError::AbsTol);
        }
        if initial_step.is_some_and(|h| !h.is_finite() || h <= 0.0) {
            return Err(ConfigError::InitialStep);
        }
        if !min_step.is_finite() || min_step <= 0.0 {
            return Err(ConfigError::MinStep);
        }
        if max_step.is_nan() || max_step < min_step {
            return Err(ConfigError::MaxStep);
        }
        if max_steps == 0 {
            return Err(ConfigError::MaxSteps);
        }

        Ok(Self {
            rel_tol,
            abs_tol,
            initial_step,
            min_step,
            max_step,
            max_steps,
        })
    }

    /// Returns a copy with different tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is non-positive or non-finite.
    pub fn with_tolerances(self, rel_tol: f64, abs_tol: f64) -> Result<Self, ConfigError> {
        Self::new(
            rel_tol,
            abs_tol,
            self.initial_step,
            self.min_step,
            self.max_step,
            self.max_steps,
        )
    }

    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    #[must_use]
    pub fn initial_step(&self) -> Option<f64> {
        self.initial_step
    }

    #[must_use]
    pub fn min_step(&self) -> f64 {
        self.min_step
    }

    #[must_use]
    pub fn max_step(&self) -> f64 {
        self.max_step
    }

    /// Maximum number of accepted steps. Rejected trials are not counted.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// The first step to try over a span of length `span`.
    pub(super) fn first_step(&self, span: f64) -> f64 {
        self.initial_step
            .unwrap_or(span * 1e-3)
            .clamp(self.min_step, self.max_step)
            .min(span)
    }
}
