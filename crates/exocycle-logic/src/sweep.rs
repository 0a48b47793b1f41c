//! Temperature sweeps — efficiency and power over a grid of reservoirs.
//!
//! Every hot temperature is paired with every cold temperature, so a sweep
//! over `m` hot and `n` cold values yields exactly `m × n` points. Distance
//! is held fixed for the whole sweep.

use serde::{Deserialize, Serialize};

use crate::cycle::{effective_gamma, efficiency_for, ReservoirPair};
use crate::error::{CycleError, CycleResult};
use crate::heat::{power_output, HeatInputModel, OrbitalDistance};
use crate::tables::{AtmosphereProfile, GasTable};

/// Evenly spaced temperatures with inclusive endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    /// First temperature (K).
    pub start: f64,
    /// Last temperature (K).
    pub end: f64,
    /// Number of points, including both ends.
    pub points: usize,
}

impl TemperatureRange {
    pub fn new(start: f64, end: f64, points: usize) -> Self {
        Self { start, end, points }
    }

    /// Expand into concrete temperatures. A single point yields `start`.
    pub fn values(&self) -> CycleResult<Vec<f64>> {
        match self.points {
            0 => Err(CycleError::EmptyRange),
            1 => Ok(vec![self.start]),
            n => {
                let step = (self.end - self.start) / (n - 1) as f64;
                let mut values: Vec<f64> = (0..n).map(|i| self.start + step * i as f64).collect();
                // Land exactly on the endpoint regardless of rounding.
                values[n - 1] = self.end;
                Ok(values)
            }
        }
    }
}

/// Sweep parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub hot: TemperatureRange,
    pub cold: TemperatureRange,
    /// Fixed distance for every point (AU).
    pub distance_au: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            hot: TemperatureRange::new(600.0, 800.0, 5),
            cold: TemperatureRange::new(200.0, 400.0, 5),
            distance_au: 1.0,
        }
    }
}

impl SweepConfig {
    /// Expand the ranges and sweep them for one atmosphere.
    pub fn run(
        &self,
        profile: &AtmosphereProfile,
        gammas: &GasTable,
        model: &HeatInputModel,
    ) -> CycleResult<Vec<SweepPoint>> {
        let hot = self.hot.values()?;
        let cold = self.cold.values()?;
        let distance = OrbitalDistance::new(self.distance_au)?;
        sweep(profile, gammas, &hot, &cold, distance, model)
    }
}

/// One (hot, cold) sample of the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub hot: f64,
    pub cold: f64,
    pub efficiency: f64,
    pub power: f64,
}

/// Efficiency and power for every (hot, cold) pair, hot-major order.
///
/// Fails on the first pair with hot ≤ cold.
pub fn sweep(
    profile: &AtmosphereProfile,
    gammas: &GasTable,
    hot_range: &[f64],
    cold_range: &[f64],
    distance: OrbitalDistance,
    model: &HeatInputModel,
) -> CycleResult<Vec<SweepPoint>> {
    let gamma = effective_gamma(profile, gammas);
    if gamma == 0.0 {
        log::warn!("sweeping an atmosphere with zero effective gamma");
    }
    let heat = model.heat_input_at(distance);

    let mut points = Vec::with_capacity(hot_range.len() * cold_range.len());
    for &hot in hot_range {
        for &cold in cold_range {
            let pair = ReservoirPair::new(hot, cold)?;
            let efficiency = efficiency_for(&pair, gamma);
            points.push(SweepPoint {
                hot,
                cold,
                efficiency,
                power: power_output(efficiency, heat),
            });
        }
    }

    log::debug!(
        "swept {} points (gamma {:.4}, heat input {})",
        points.len(),
        gamma,
        heat
    );
    Ok(points)
}
