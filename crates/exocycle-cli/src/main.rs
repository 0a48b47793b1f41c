//! ExoCycle - Stirling-style heat cycle calculator
//!
//! Prompts for a planet, reservoir temperatures, and orbital distance,
//! prints the efficiency and power report, then opens the sweep viewer.
//!
//! Usage:
//!   cargo run -p exocycle-cli

mod session;

use std::io;

use anyhow::{Context, Result};
use exocycle_logic::config::SessionConfig;
use exocycle_logic::tables::GasTables;

use crate::session::SessionOutcome;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let tables = GasTables::builtin().context("loading built-in gas tables")?;
    let config = SessionConfig::default();

    println!("=== ExoCycle Heat Cycle Calculator ===\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    match session::run(&mut input, &mut out, &tables, &config).context("interactive session")? {
        SessionOutcome::Reported(report) => {
            log::debug!("session report: {:?}", report);
        }
        SessionOutcome::Rejected(err) => {
            log::info!("session ended without a report: {}", err);
        }
    }

    // ── Sweep demo ──
    let profile = tables.profile(&config.demo_planet);
    let points = config
        .sweep
        .run(&profile, &tables.gammas, &config.heat)
        .context("sweeping demo temperature ranges")?;
    println!(
        "\nPlotting {} sweep points for {} (close the window to exit)",
        points.len(),
        config.demo_planet
    );

    let code = exocycle_viewer::show(points, &config.demo_planet);
    if code != 0 {
        anyhow::bail!("viewer exited with code {}", code);
    }
    Ok(())
}
