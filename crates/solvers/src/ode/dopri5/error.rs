use std::error::Error as StdError;

use thiserror::Error;

use super::config::ConfigError;

/// Errors that can occur during Dormand–Prince integration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid time span: [{t0}, {t_end}]")]
    InvalidSpan { t0: f64, t_end: f64 },

    #[error("exceeded {max_steps} accepted steps at t = {t} before reaching the end of the span")]
    MaxStepsExceeded { t: f64, max_steps: usize },

    #[error("step size {h} fell below the minimum at t = {t}")]
    StepSizeUnderflow { t: f64, h: f64 },

    #[error("state became non-finite at t = {t}")]
    NonFinite { t: f64 },

    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }
}
