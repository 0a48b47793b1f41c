//! Heat-cycle formulas — effective gamma, lambda ratio, efficiency bound.
//!
//! A planet's atmosphere is treated as the working gas. Its heat-capacity
//! ratio is the percentage-weighted sum of the tabulated ratios of its
//! components, and that single gamma feeds every downstream formula.

use serde::{Deserialize, Serialize};

use crate::error::{CycleError, CycleResult};
use crate::tables::{AtmosphereProfile, GasTable};

/// Hot and cold reservoir temperatures in Kelvin, with hot > cold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReservoirPair {
    hot: f64,
    cold: f64,
}

impl ReservoirPair {
    /// Validate the ordering. NaN on either side is rejected too.
    pub fn new(hot: f64, cold: f64) -> CycleResult<Self> {
        if hot > cold {
            Ok(Self { hot, cold })
        } else {
            Err(CycleError::HotNotAboveCold { hot, cold })
        }
    }

    pub fn hot(&self) -> f64 {
        self.hot
    }

    pub fn cold(&self) -> f64 {
        self.cold
    }

    /// Th / Tc.
    pub fn temperature_ratio(&self) -> f64 {
        self.hot / self.cold
    }
}

/// Largest and smallest defined gamma among an atmosphere's gases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GammaBounds {
    pub max: f64,
    pub min: f64,
}

/// Percentage-weighted heat-capacity ratio of an atmosphere.
///
/// Gases missing from the table, or listed with an undefined gamma, are
/// skipped. An atmosphere with no matching gas yields `0.0`; callers must
/// treat that as degenerate before using it as a divisor.
pub fn effective_gamma(profile: &AtmosphereProfile, gammas: &GasTable) -> f64 {
    profile
        .iter()
        .filter_map(|(gas, pct)| gammas.gamma(gas).map(|g| g * (pct / 100.0)))
        .fold(0.0, |acc, weighted| acc + weighted)
}

/// `(gamma - 1) / gamma`, the exponent shared by lambda and efficiency.
fn gamma_exponent(gamma: f64) -> f64 {
    (gamma - 1.0) / gamma
}

/// Lambda ratio: `(Th/Tc) * exp((gamma-1)/gamma)` for the atmosphere's
/// effective gamma.
///
/// Requires hot > cold. Fails with [`CycleError::DegenerateGamma`] when no
/// gas contributes.
pub fn lambda_ratio(
    profile: &AtmosphereProfile,
    gammas: &GasTable,
    hot: f64,
    cold: f64,
) -> CycleResult<f64> {
    let pair = ReservoirPair::new(hot, cold)?;
    let gamma = effective_gamma(profile, gammas);
    if gamma == 0.0 {
        return Err(CycleError::DegenerateGamma);
    }
    Ok(pair.temperature_ratio() * gamma_exponent(gamma).exp())
}

/// Gamma-adjusted efficiency bound: `1 - (Tc/Th)^((gamma-1)/gamma)`.
///
/// Requires hot > cold. The result is not clamped; a zero gamma produces a
/// non-finite value.
pub fn efficiency(hot: f64, cold: f64, gamma: f64) -> CycleResult<f64> {
    let pair = ReservoirPair::new(hot, cold)?;
    Ok(efficiency_for(&pair, gamma))
}

/// [`efficiency`] for an already-validated pair.
pub fn efficiency_for(pair: &ReservoirPair, gamma: f64) -> f64 {
    1.0 - (pair.cold() / pair.hot()).powf(gamma_exponent(gamma))
}

/// Max and min gamma among the atmosphere's gases that have one defined.
///
/// Returns `None` when no gas in the profile has a defined gamma.
pub fn gamma_bounds(profile: &AtmosphereProfile, gammas: &GasTable) -> Option<GammaBounds> {
    profile
        .iter()
        .filter_map(|(gas, _)| gammas.gamma(gas))
        .fold(None, |bounds, g| match bounds {
            None => Some(GammaBounds { max: g, min: g }),
            Some(b) => Some(GammaBounds {
                max: b.max.max(g),
                min: b.min.min(g),
            }),
        })
}
