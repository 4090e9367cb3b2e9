//! Solve an outbreak model and plot the result.
//!
//! # Usage
//!
//! ```text
//! cargo run --example outbreak --features plot -- zombie
//! cargo run --example outbreak --features plot -- recovering
//! cargo run --example outbreak --features plot -- epidemic
//! cargo run --example outbreak --features plot -- behavior
//! ```
//!
//! Solver progress is logged to the console. Set `OUTBREAK_LOG=debug` to see
//! every accepted step, or `trace` to also see rejected ones.
//!
//! # Modes
//!
//! - **zombie** — Zombie outbreak without recovery over ten days.
//! - **recovering** — Same outbreak, but the undead may recover.
//! - **epidemic** — Seven-compartment epidemic with quarantine and
//!   hospitalization, as population fractions.
//! - **behavior** — Zombie outbreak where opinion on reporting and killing
//!   the exposed evolves with the socio-economic loss. The quarantine holds
//!   one person, so it fills early and stays at capacity.

use std::error::Error;

use log::{LevelFilter, info};
use log4rs::{
    Config as LogConfig,
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
};
use outbreak_core::{Compartmental, Sample};
use outbreak_models::{
    behavior::{Behavior, BehaviorParams},
    epidemic::{self, EpidemicParams},
    zombie::{self, ZombieParams},
};
use outbreak_observers::{LogObserver, ShowConfig, figure::Figure, show};
use outbreak_solvers::ode::dopri5;

const LOG_PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l})} {t} - {m}{n}";

fn main() -> Result<(), Box<dyn Error>> {
    init_logging()?;

    let mode = std::env::args().nth(1).unwrap_or_else(|| "zombie".into());
    match mode.as_str() {
        "zombie" => {
            let params = ZombieParams::from_basic_order([0.0, 0.0001, 0.0095, 0.0001, 0.005]);
            run(
                &zombie::Basic::new(params),
                [500.0, 1.0, 0.0, 0.0],
                10.0,
                &Figure::basic_zombie(),
            )
        }
        "recovering" => {
            let params = ZombieParams::from_array([0.0095, 0.0, 0.0001, 0.0001, 0.05, 0.005]);
            run(
                &zombie::Recovering::new(params),
                [500.0, 1.0, 0.0, 0.0],
                30.0,
                &Figure::basic_zombie(),
            )
        }
        "epidemic" => {
            let params = EpidemicParams::from_array([
                0.3, 0.5, 0.1, 0.05, 0.2, 0.4, 0.14, 0.07, 0.07, 0.05, 0.1, 0.05, 0.01, 0.01,
                0.005, 0.0, 0.002, 0.01,
            ]);
            run(
                &epidemic::Basic::new(params),
                [0.99, 0.0, 0.0, 0.01, 0.0, 0.0, 0.0],
                200.0,
                &Figure::epidemic(),
            )
        }
        "behavior" => {
            let params = BehaviorParams::from_array([
                0.0095, 0.0, 0.0001, 0.1, 0.05, 0.005, 1.0, 0.5, 0.5, 0.5, 0.1, 1.0, 0.5, 0.5,
            ]);
            run(
                &Behavior::new(params),
                [500.0, 1.0, 0.0, 0.0, 0.0, 0.4, 0.6, 0.0],
                30.0,
                &Figure::behavior(),
            )
        }
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: outbreak [zombie|recovering|epidemic|behavior]");
            std::process::exit(1);
        }
    }
}

fn run<M, const N: usize>(
    model: &M,
    initial: [f64; N],
    t_end: f64,
    figure: &Figure,
) -> Result<(), Box<dyn Error>>
where
    M: Compartmental<N>,
{
    let config = dopri5::Config::default();
    let observer = LogObserver::new().target("outbreak").every(10);

    let solution = dopri5::solve(model, Sample::new(0.0, initial), t_end, &config, observer)?;

    let stats = solution.stats;
    info!(
        target: "outbreak",
        "{} accepted, {} rejected, {} evaluations",
        stats.accepted, stats.rejected, stats.evaluations
    );
    if let Some((t, state)) = solution.trajectory.last() {
        let summary: Vec<String> = <M as Compartmental<N>>::LABELS
            .iter()
            .zip(state.as_array())
            .map(|(label, value)| format!("{label}={value:.4}"))
            .collect();
        info!(target: "outbreak", "t={t}: {}", summary.join(" "));
    }

    show(figure, &solution.trajectory, ShowConfig::new().legend())?;
    Ok(())
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    let level = std::env::var("OUTBREAK_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info);

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;

    log4rs::init_config(config)?;
    Ok(())
}
