use std::ops::{Index, IndexMut};

use crate::StepIntegrable;

/// An ordered, fixed-length vector of compartment sizes.
///
/// The meaning of each slot is defined by the model that consumes it (see
/// [`Compartmental::LABELS`](crate::Compartmental::LABELS)). Values are not
/// validated: negative or out-of-range entries are passed to models as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<const N: usize>([f64; N]);

/// The time derivative of a [`State`], in the same order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates<const N: usize>([f64; N]);

/// A model input: the time and the compartment state at that time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<const N: usize> {
    pub t: f64,
    pub state: State<N>,
}

impl<const N: usize> Sample<N> {
    /// Creates a sample at time `t`.
    pub fn new(t: f64, state: impl Into<State<N>>) -> Self {
        Self {
            t,
            state: state.into(),
        }
    }
}

impl<const N: usize> State<N> {
    /// Creates a state from compartment values.
    #[must_use]
    pub const fn new(values: [f64; N]) -> Self {
        Self(values)
    }

    /// Returns the compartment values.
    #[must_use]
    pub const fn as_array(&self) -> &[f64; N] {
        &self.0
    }

    /// Consumes the state, returning the compartment values.
    #[must_use]
    pub const fn into_array(self) -> [f64; N] {
        self.0
    }

    /// Sum over all slots.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Returns `true` if every slot is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    /// Returns `y + h · Σ cᵢ·kᵢ`, the building block of explicit Runge–Kutta stages.
    #[must_use]
    pub fn advance(&self, h: f64, terms: &[(f64, &Rates<N>)]) -> Self {
        let mut next = self.0;
        for (i, value) in next.iter_mut().enumerate() {
            let slope: f64 = terms.iter().map(|(c, k)| c * k.0[i]).sum();
            *value += h * slope;
        }
        Self(next)
    }
}

impl<const N: usize> Rates<N> {
    /// Creates rates from per-compartment derivatives.
    #[must_use]
    pub const fn new(values: [f64; N]) -> Self {
        Self(values)
    }

    /// All-zero rates.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0.0; N])
    }

    #[must_use]
    pub const fn as_array(&self) -> &[f64; N] {
        &self.0
    }

    #[must_use]
    pub const fn into_array(self) -> [f64; N] {
        self.0
    }

    /// Net rate of change of the summed state.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Returns the rates multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0.map(|v| v * factor))
    }

    /// Returns `true` if every slot is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl<const N: usize> StepIntegrable<f64> for State<N> {
    type Derivative = Rates<N>;

    fn step(&self, derivative: Rates<N>, dt: f64) -> Self {
        self.advance(dt, &[(1.0, &derivative)])
    }
}

impl<const N: usize> From<[f64; N]> for State<N> {
    fn from(values: [f64; N]) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<[f64; N]> for Rates<N> {
    fn from(values: [f64; N]) -> Self {
        Self(values)
    }
}

impl<const N: usize> Index<usize> for State<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for State<N> {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.0[index]
    }
}

impl<const N: usize> Index<usize> for Rates<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}
