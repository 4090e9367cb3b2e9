use outbreak_core::State;

/// Time points and the compartment state at each, in integration order.
///
/// `times()[i]` pairs with `states()[i]`. Columns are addressed by the model's
/// state index, e.g. column 1 is `Z` for the zombie models.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory<const N: usize> {
    times: Vec<f64>,
    states: Vec<State<N>>,
}

impl<const N: usize> Trajectory<N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            times: Vec::new(),
            states: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            times: Vec::with_capacity(capacity),
            states: Vec::with_capacity(capacity),
        }
    }

    /// Appends a point.
    pub fn push(&mut self, t: f64, state: State<N>) {
        self.times.push(t);
        self.states.push(state);
    }

    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    #[must_use]
    pub fn states(&self) -> &[State<N>] {
        &self.states
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The final point, if any.
    #[must_use]
    pub fn last(&self) -> Option<(f64, &State<N>)> {
        self.times.last().copied().zip(self.states.last())
    }

    /// Iterates over `(t, state)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &State<N>)> {
        self.times.iter().copied().zip(self.states.iter())
    }

    /// The values of one state slot over time, or `None` if `index >= N`.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        (index < N).then(|| self.states.iter().map(|s| s[index]).collect())
    }

    /// Several columns at once, or `None` if any index is out of range.
    #[must_use]
    pub fn columns(&self, indices: &[usize]) -> Option<Vec<Vec<f64>>> {
        indices.iter().map(|&i| self.column(i)).collect()
    }
}

impl<const N: usize> FromIterator<(f64, State<N>)> for Trajectory<N> {
    fn from_iter<T: IntoIterator<Item = (f64, State<N>)>>(iter: T) -> Self {
        let mut trajectory = Self::new();
        for (t, state) in iter {
            trajectory.push(t, state);
        }
        trajectory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trajectory<3> {
        [
            (0.0, State::new([10.0, 1.0, 0.0])),
            (0.5, State::new([9.0, 1.5, 0.5])),
            (1.0, State::new([8.0, 2.0, 1.0])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn columns_follow_state_order() {
        let trajectory = sample();
        assert_eq!(trajectory.times(), [0.0, 0.5, 1.0]);
        assert_eq!(trajectory.column(1), Some(vec![1.0, 1.5, 2.0]));
        assert_eq!(
            trajectory.columns(&[0, 2]),
            Some(vec![vec![10.0, 9.0, 8.0], vec![0.0, 0.5, 1.0]])
        );
    }

    #[test]
    fn out_of_range_columns_are_none() {
        let trajectory = sample();
        assert_eq!(trajectory.column(3), None);
        assert_eq!(trajectory.columns(&[0, 7]), None);
    }

    #[test]
    fn last_point() {
        let trajectory = sample();
        let (t, state) = trajectory.last().unwrap();
        assert_eq!(t, 1.0);
        assert_eq!(*state, State::new([8.0, 2.0, 1.0]));
        assert!(Trajectory::<3>::new().last().is_none());
        assert_eq!(trajectory.iter().count(), trajectory.len());
    }
}
