/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets the forward Euler solver advance the type via
/// `value + derivative * delta`. For compartment models `Delta` is time and the
/// derivative is the vector of compartment rates.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;
