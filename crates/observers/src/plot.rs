//! Rendering trajectories with egui.
//!
//! [`show`] draws a finished [`Figure`]; [`PlotObserver`] records traces while
//! a solver runs.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use outbreak_core::Observer;
use outbreak_solvers::{
    Trajectory,
    ode::{dopri5, euler},
};

use crate::figure::{Figure, FigureError, Series};

/// Configuration for opening a plot window.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// show(&Figure::behavior(), &trajectory, ShowConfig::new().legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_y: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title override, no
    /// legend, linear scale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            log_y: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each curve by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Enables a logarithmic y-axis (base 10).
    ///
    /// Non-positive values are skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from [`show`].
#[derive(Debug, thiserror::Error)]
pub enum ShowError {
    #[error(transparent)]
    Figure(#[from] FigureError),

    #[error("failed to open plot window: {0}")]
    Window(#[from] eframe::Error),
}

/// Opens a blocking window drawing each panel of `figure` side by side.
///
/// The window title is the config's title if set, otherwise the figure's.
///
/// # Errors
///
/// Fails if the figure selects a column the trajectory lacks, or if the
/// native window cannot be created.
pub fn show<const N: usize>(
    figure: &Figure,
    trajectory: &Trajectory<N>,
    config: ShowConfig,
) -> Result<(), ShowError> {
    let panels = figure
        .panels()
        .iter()
        .zip(figure.series(trajectory)?)
        .map(|(panel, series)| (panel.title().to_owned(), series))
        .collect();
    let title = config.title.unwrap_or_else(|| figure.title().to_owned());

    open(
        &title,
        PlotApp {
            panels,
            legend: config.legend,
            log_y: config.log_y,
        },
    )?;
    Ok(())
}

/// Extracts plottable data from a solver event.
///
/// Implemented for both solvers' events, plotting every compartment against
/// time. Return `None` from [`x`][Plottable::x] to skip the event entirely;
/// return `None` in a trace slot to skip that trace for the event.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl<const N: usize> Plottable<N> for euler::Event<N> {
    fn x(&self) -> Option<f64> {
        Some(self.snapshot.input.t)
    }

    fn traces(&self) -> [Option<f64>; N] {
        self.snapshot.input.state.into_array().map(Some)
    }
}

/// Rejected trials are skipped.
impl<const N: usize> Plottable<N> for dopri5::Event<N> {
    fn x(&self) -> Option<f64> {
        match self {
            Self::Accepted { snapshot, .. } => Some(snapshot.input.t),
            Self::Rejected { .. } => None,
        }
    }

    fn traces(&self) -> [Option<f64>; N] {
        match self {
            Self::Accepted { snapshot, .. } => snapshot.input.state.into_array().map(Some),
            Self::Rejected { .. } => [None; N],
        }
    }
}

/// An observer that collects trace data during solving and displays it via egui.
///
/// The const generic `N` is the number of traces. Record data by either:
///
/// - **Direct path** — pass `&mut PlotObserver` as the solver observer; each
///   accepted step adds one point per compartment.
/// - **Closure path** — wrap `&mut PlotObserver` in a closure and call
///   [`record`][PlotObserver::record] with derived quantities.
///
/// # Example — closure path
///
/// ```ignore
/// let mut obs = PlotObserver::<1>::new(["Living"]);
/// dopri5::solve(&model, initial, 50.0, &config, |event: &dopri5::Event<8>| {
///     if let dopri5::Event::Accepted { snapshot, .. } = event {
///         let y = snapshot.input.state;
///         obs.record(snapshot.input.t, [Some(y[0] + y[2] + y[3])]);
///     }
///     None
/// })?;
/// obs.show(ShowConfig::new().title("Living humans"))?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Opens a blocking window displaying all collected traces in one panel.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let title = config.title.unwrap_or_default();
        let series = self
            .names
            .into_iter()
            .zip(self.data)
            .map(|(name, points)| Series { name, points })
            .collect();

        open(
            &title,
            PlotApp {
                panels: vec![(title.clone(), series)],
                legend: config.legend,
                log_y: config.log_y,
            },
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

fn open(title: &str, app: PlotApp) -> Result<(), eframe::Error> {
    eframe::run_native(
        title,
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}

/// The egui [`eframe::App`] that renders panels of curves.
struct PlotApp {
    panels: Vec<(String, Vec<Series>)>,
    legend: bool,
    log_y: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(self.panels.len().max(1), |columns| {
                for (index, (ui, (title, series))) in
                    columns.iter_mut().zip(&self.panels).enumerate()
                {
                    ui.heading(title);
                    let mut plot = Plot::new(("panel", index)).x_axis_label("t");
                    if self.legend {
                        plot = plot.legend(Legend::default());
                    }
                    if self.log_y {
                        plot = plot.y_axis_label("log₁₀");
                    }
                    plot.show(ui, |plot_ui| {
                        for curve in series {
                            let line = Line::new(points(&curve.points, self.log_y));
                            plot_ui.line(line.name(&curve.name));
                        }
                    });
                }
            });
        });
    }
}

fn points(points: &[[f64; 2]], log_y: bool) -> PlotPoints {
    if log_y {
        points
            .iter()
            .filter(|p| p[1] > 0.0)
            .map(|p| [p[0], p[1].log10()])
            .collect()
    } else {
        points.iter().copied().collect()
    }
}
