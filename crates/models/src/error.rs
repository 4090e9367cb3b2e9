use thiserror::Error;

/// Errors raised when evaluating a model.
///
/// The equations themselves are total over the reals; these errors cover the
/// unspecified model and malformed positional inputs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("{model} is not implemented: its equations have not been specified")]
    NotImplemented { model: &'static str },

    #[error("{model} expects {expected} state values, got {actual}")]
    StateLength {
        model: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{model} expects {expected} parameters, got {actual}")]
    ParamLength {
        model: &'static str,
        expected: usize,
        actual: usize,
    },
}
