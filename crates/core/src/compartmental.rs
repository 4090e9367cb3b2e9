use crate::{Model, Rates, Sample, State};

/// A model giving the right-hand side `dy/dt = f(t, y)` of a compartmental system.
///
/// The state order is fixed by [`LABELS`](Self::LABELS); the returned
/// [`Rates`] use the same order. Parameters live on the implementing type and
/// are read-only for the lifetime of an integration run.
pub trait Compartmental<const N: usize>:
    Model<Input = Sample<N>, Output = Rates<N>>
{
    /// Compartment names, in state-vector order.
    const LABELS: [&'static str; N];

    /// Evaluates the rates at `(t, state)`.
    ///
    /// # Errors
    ///
    /// Propagates the model's own error.
    fn rates(&self, t: f64, state: &State<N>) -> Result<Rates<N>, Self::Error> {
        self.call(&Sample { t, state: *state })
    }
}
