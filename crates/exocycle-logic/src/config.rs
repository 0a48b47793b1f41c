//! Session configuration — the heat constant, sweep ranges, and demo planet.
//!
//! Everything here is compiled-in. The defaults reproduce the calculator's
//! stock behavior: k = 1.0, a 600–800 K × 200–400 K sweep with five points
//! per axis at 1 AU, plotted for Earth.

use serde::{Deserialize, Serialize};

use crate::heat::HeatInputModel;
use crate::sweep::SweepConfig;

/// Parameters for one run of the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Heat-input model used for both the interactive report and the sweep.
    pub heat: HeatInputModel,
    /// Temperature sweep rendered by the viewer.
    pub sweep: SweepConfig,
    /// Planet whose atmosphere the sweep uses.
    pub demo_planet: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            heat: HeatInputModel::default(),
            sweep: SweepConfig::default(),
            demo_planet: "Earth".to_string(),
        }
    }
}
