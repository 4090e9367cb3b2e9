use std::error::Error as StdError;

/// Errors that can occur during Euler integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("step size must be finite and positive, got {dt}")]
    InvalidStep { dt: f64 },

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
