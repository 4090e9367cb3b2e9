//! Panel layouts for presenting trajectories.
//!
//! A [`Figure`] is a list of [`Panel`]s. Each panel selects trajectory
//! columns by position and names them for the legend. Layouts are plain data
//! so they can be checked without opening a window; rendering lives behind
//! the `plot` feature.

use outbreak_solvers::Trajectory;
use thiserror::Error;

const POPULATION_TITLE: &str = "Population Changes Over Time";

/// Errors raised when a layout does not fit the data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FigureError {
    #[error("column {column} is out of range for a {len}-compartment trajectory")]
    ColumnOutOfRange { column: usize, len: usize },

    #[error("{columns} columns but {legend} legend entries")]
    LegendMismatch { columns: usize, legend: usize },
}

/// One named curve, as `[t, value]` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

/// A single plot area showing selected trajectory columns against time.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    title: String,
    columns: Vec<usize>,
    legend: Vec<String>,
}

impl Panel {
    /// Creates a panel plotting `columns`, labeled by `legend` in the same
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`FigureError::LegendMismatch`] if the lengths differ.
    pub fn new(
        title: impl Into<String>,
        columns: &[usize],
        legend: &[&str],
    ) -> Result<Self, FigureError> {
        if columns.len() != legend.len() {
            return Err(FigureError::LegendMismatch {
                columns: columns.len(),
                legend: legend.len(),
            });
        }
        Ok(Self::fixed(title, columns, legend))
    }

    fn fixed(title: impl Into<String>, columns: &[usize], legend: &[&str]) -> Self {
        Self {
            title: title.into(),
            columns: columns.to_vec(),
            legend: legend.iter().map(|&name| name.to_owned()).collect(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    #[must_use]
    pub fn legend(&self) -> &[String] {
        &self.legend
    }

    /// Extracts this panel's curves from a trajectory.
    ///
    /// # Errors
    ///
    /// Returns [`FigureError::ColumnOutOfRange`] if a selected column does not
    /// exist in an `N`-compartment state.
    pub fn series<const N: usize>(
        &self,
        trajectory: &Trajectory<N>,
    ) -> Result<Vec<Series>, FigureError> {
        self.columns
            .iter()
            .zip(&self.legend)
            .map(|(&column, name)| {
                if column >= N {
                    return Err(FigureError::ColumnOutOfRange { column, len: N });
                }
                let points = trajectory
                    .iter()
                    .map(|(t, state)| [t, state[column]])
                    .collect();
                Ok(Series {
                    name: name.clone(),
                    points,
                })
            })
            .collect()
    }
}

/// A window's worth of panels, drawn side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    title: String,
    panels: Vec<Panel>,
}

impl Figure {
    #[must_use]
    pub fn new(title: impl Into<String>, panels: Vec<Panel>) -> Self {
        Self {
            title: title.into(),
            panels,
        }
    }

    /// A single panel with one curve per compartment, named by `labels`.
    #[must_use]
    pub fn from_labels(title: impl Into<String>, labels: &[&str]) -> Self {
        let title = title.into();
        let columns: Vec<usize> = (0..labels.len()).collect();
        let panel = Panel::fixed(title.clone(), &columns, labels);
        Self::new(title, vec![panel])
    }

    /// Susceptible, zombie, and undead counts of either zombie model.
    #[must_use]
    pub fn basic_zombie() -> Self {
        Self::new(
            "Zombie outbreak",
            vec![Panel::fixed(
                POPULATION_TITLE,
                &[0, 1, 2],
                &["Susceptibles", "Zombies", "Undead"],
            )],
        )
    }

    /// The behavioral model: populations, support for each policy, and loss.
    #[must_use]
    pub fn behavior() -> Self {
        Self::new(
            "Zombie outbreak with human behavior",
            vec![
                Panel::fixed(
                    POPULATION_TITLE,
                    &[0, 1, 2, 3],
                    &["Susceptibles", "Zombies", "Exposed", "Quarantined"],
                ),
                Panel::fixed("Population Support", &[5, 6], &["x_S", "x_E"]),
                Panel::fixed("Socio-Economic Loss from murder", &[7], &["Loss"]),
            ],
        )
    }

    /// All seven compartments of the basic epidemic model.
    #[must_use]
    pub fn epidemic() -> Self {
        Self::from_labels(
            "Epidemic Progression",
            &[
                "Susceptible",
                "Exposed",
                "Asymptomatic",
                "Symptomatic",
                "Quarantined",
                "Hospitalized",
                "Removed",
            ],
        )
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Extracts every panel's curves, in panel order.
    ///
    /// # Errors
    ///
    /// Fails if any panel selects a column the trajectory does not have.
    pub fn series<const N: usize>(
        &self,
        trajectory: &Trajectory<N>,
    ) -> Result<Vec<Vec<Series>>, FigureError> {
        self.panels
            .iter()
            .map(|panel| panel.series(trajectory))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use outbreak_core::State;

    fn ramp<const N: usize>(points: usize) -> Trajectory<N> {
        (0..points)
            .map(|i| {
                let t = i as f64;
                (t, State::new(std::array::from_fn(|c| t * 10.0 + c as f64)))
            })
            .collect()
    }

    #[test]
    fn basic_zombie_plots_first_three_columns() {
        let figure = Figure::basic_zombie();
        let [panel] = figure.panels() else {
            panic!("expected one panel");
        };
        assert_eq!(panel.title(), "Population Changes Over Time");
        assert_eq!(panel.columns(), [0, 1, 2]);
        assert_eq!(panel.legend(), ["Susceptibles", "Zombies", "Undead"]);
    }

    #[test]
    fn behavior_has_three_panels() {
        let figure = Figure::behavior();
        let titles: Vec<_> = figure.panels().iter().map(Panel::title).collect();
        assert_eq!(
            titles,
            [
                "Population Changes Over Time",
                "Population Support",
                "Socio-Economic Loss from murder"
            ]
        );
        assert_eq!(figure.panels()[0].columns(), [0, 1, 2, 3]);
        assert_eq!(figure.panels()[1].columns(), [5, 6]);
        assert_eq!(figure.panels()[2].columns(), [7]);
        assert_eq!(figure.panels()[1].legend(), ["x_S", "x_E"]);
        assert_eq!(figure.panels()[2].legend(), ["Loss"]);
    }

    #[test]
    fn epidemic_covers_every_compartment() {
        let figure = Figure::epidemic();
        assert_eq!(figure.panels().len(), 1);
        assert_eq!(figure.panels()[0].columns(), [0, 1, 2, 3, 4, 5, 6]);
        assert!(figure.series(&ramp::<7>(3)).is_ok());
    }

    #[test]
    fn series_pairs_time_with_selected_column() {
        let trajectory = ramp::<8>(3);
        let panels = Figure::behavior().series(&trajectory).unwrap();

        let loss = &panels[2][0];
        assert_eq!(loss.name, "Loss");
        assert_eq!(loss.points.len(), 3);
        assert_relative_eq!(loss.points[2][0], 2.0);
        assert_relative_eq!(loss.points[2][1], 27.0);

        let x_e = &panels[1][1];
        assert_eq!(x_e.name, "x_E");
        assert_relative_eq!(x_e.points[1][1], 16.0);
    }

    #[test]
    fn behavior_layout_rejects_zombie_trajectory() {
        let error = Figure::behavior().series(&ramp::<4>(2)).unwrap_err();
        assert_eq!(error, FigureError::ColumnOutOfRange { column: 5, len: 4 });
    }

    #[test]
    fn legend_must_match_columns() {
        assert_eq!(
            Panel::new("p", &[0, 1], &["a"]),
            Err(FigureError::LegendMismatch {
                columns: 2,
                legend: 1
            })
        );
        let panel = Panel::new("p", &[1], &["b"]).unwrap();
        assert_eq!(panel.series(&ramp::<2>(1)).unwrap()[0].points, [[0.0, 1.0]]);
    }

    #[test]
    fn empty_trajectory_gives_empty_series() {
        let panels = Figure::basic_zombie().series(&Trajectory::<4>::new()).unwrap();
        assert!(panels[0].iter().all(|series| series.points.is_empty()));
    }
}
