//! Heat input and power output.
//!
//! Heat reaching the engine falls off with the square of the distance from
//! the energy source. The scale constant is a calibration placeholder, not a
//! physical value, so it lives on [`HeatInputModel`] where callers can
//! override it.

use serde::{Deserialize, Serialize};

use crate::error::{CycleError, CycleResult};

/// Default inverse-square scale constant.
pub const DEFAULT_HEAT_CONSTANT: f64 = 1.0;

/// Inverse-square heat-input model: `k / distance²`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatInputModel {
    /// Scale constant `k`.
    pub constant: f64,
}

impl Default for HeatInputModel {
    fn default() -> Self {
        Self {
            constant: DEFAULT_HEAT_CONSTANT,
        }
    }
}

impl HeatInputModel {
    pub fn with_constant(constant: f64) -> Self {
        Self { constant }
    }

    /// Heat input at `distance_au`. No validation; see [`OrbitalDistance`].
    pub fn heat_input(&self, distance_au: f64) -> f64 {
        self.constant / distance_au.powi(2)
    }

    /// Heat input at a validated distance.
    pub fn heat_input_at(&self, distance: OrbitalDistance) -> f64 {
        self.heat_input(distance.au())
    }
}

/// Distance from the energy source in AU, strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalDistance(f64);

impl OrbitalDistance {
    pub fn new(au: f64) -> CycleResult<Self> {
        if au > 0.0 {
            Ok(Self(au))
        } else {
            Err(CycleError::NonPositiveDistance(au))
        }
    }

    pub fn au(&self) -> f64 {
        self.0
    }
}

/// Power output: efficiency × heat input. Out-of-range efficiencies pass
/// straight through.
pub fn power_output(efficiency: f64, heat_input: f64) -> f64 {
    efficiency * heat_input
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_input_inverse_square() {
        let model = HeatInputModel::default();
        assert_eq!(model.heat_input(2.0), 0.25);
        assert_eq!(model.heat_input(1.0), 1.0);
        assert_eq!(model.heat_input(0.5), 4.0);
    }

    #[test]
    fn test_heat_constant_override() {
        let model = HeatInputModel::with_constant(1361.0);
        assert_eq!(model.heat_input(1.0), 1361.0);
        assert_eq!(model.heat_input(2.0), 340.25);
    }

    #[test]
    fn test_power_output_product() {
        assert_eq!(power_output(0.2, 0.25), 0.05);
    }

    #[test]
    fn test_power_output_passes_negative_efficiency() {
        assert_eq!(power_output(-0.5, 2.0), -1.0);
    }

    #[test]
    fn test_orbital_distance_positive() {
        let d = OrbitalDistance::new(1.52).unwrap();
        assert_eq!(d.au(), 1.52);
        let model = HeatInputModel::default();
        assert_eq!(model.heat_input_at(d), model.heat_input(1.52));
    }

    #[test]
    fn test_orbital_distance_rejects_zero_and_negative() {
        assert!(matches!(
            OrbitalDistance::new(0.0),
            Err(CycleError::NonPositiveDistance(_))
        ));
        assert!(OrbitalDistance::new(-1.0).is_err());
        assert!(OrbitalDistance::new(f64::NAN).is_err());
    }
}
