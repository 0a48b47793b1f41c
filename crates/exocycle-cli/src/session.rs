//! Interactive session — collect four inputs, then compute and report.
//!
//! The session has two phases. Collecting reads the planet name and three
//! numbers; a malformed number is returned as [`CycleError::Parse`] and ends
//! the program. Computing validates the reservoirs and distance, and either
//! prints the report block or a single `Error:` line. Either way the session
//! is over; there is no retry.

use std::fmt;
use std::io::{BufRead, Write};

use exocycle_logic::config::SessionConfig;
use exocycle_logic::cycle::{
    effective_gamma, efficiency_for, gamma_bounds, lambda_ratio, GammaBounds, ReservoirPair,
};
use exocycle_logic::heat::{power_output, OrbitalDistance};
use exocycle_logic::tables::GasTables;
use exocycle_logic::{CycleError, CycleResult};

/// Raw values gathered from the prompts.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionInputs {
    pub planet: String,
    pub hot: f64,
    pub cold: f64,
    pub distance_au: f64,
}

/// Everything printed for a successful session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub planet: String,
    pub gamma: f64,
    /// `None` when the atmosphere has no gas with a tabulated gamma.
    pub lambda: Option<f64>,
    pub efficiency: f64,
    pub heat_input: f64,
    pub power: f64,
    pub gamma_bounds: Option<GammaBounds>,
}

/// How the session ended.
#[derive(Debug)]
pub enum SessionOutcome {
    Reported(SessionReport),
    Rejected(CycleError),
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results for {}:", self.planet)?;
        writeln!(f, "  Effective gamma:  {:.4}", self.gamma)?;
        match self.lambda {
            Some(lambda) => writeln!(f, "  Lambda ratio:     {:.4}", lambda)?,
            None => writeln!(f, "  Lambda ratio:     undefined (no gas with a tabulated gamma)")?,
        }
        writeln!(f, "  Efficiency:       {:.2}%", self.efficiency * 100.0)?;
        writeln!(f, "  Heat input:       {:.4}", self.heat_input)?;
        write!(f, "  Power output:     {:.4}", self.power)?;
        if let Some(bounds) = self.gamma_bounds {
            write!(
                f,
                "\n  Gamma range:      {:.4} to {:.4}",
                bounds.min, bounds.max
            )?;
        }
        Ok(())
    }
}

/// Run one session: prompt, compute, print.
///
/// Validation failures are printed and returned as [`SessionOutcome::Rejected`].
/// Parse and IO failures are returned as errors.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    tables: &GasTables,
    config: &SessionConfig,
) -> CycleResult<SessionOutcome> {
    let inputs = collect_inputs(input, out, tables)?;

    match compute(&inputs, tables, config) {
        Ok(report) => {
            writeln!(out, "\n{}", report)?;
            Ok(SessionOutcome::Reported(report))
        }
        Err(err) if err.is_validation() => {
            log::debug!("rejected inputs {:?}: {}", inputs, err);
            writeln!(out, "Error: {}", err)?;
            Ok(SessionOutcome::Rejected(err))
        }
        Err(err) => Err(err),
    }
}

/// Prompt for planet, hot temperature, cold temperature, and distance.
pub fn collect_inputs<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    tables: &GasTables,
) -> CycleResult<SessionInputs> {
    let planets = tables.planet_names().join(", ");
    let planet = prompt(input, out, &format!("Enter the planet name ({}): ", planets))?;
    let hot = parse_field(
        "hot temperature",
        &prompt(input, out, "Enter the hot reservoir temperature (K): ")?,
    )?;
    let cold = parse_field(
        "cold temperature",
        &prompt(input, out, "Enter the cold reservoir temperature (K): ")?,
    )?;
    let distance_au = parse_field(
        "distance",
        &prompt(input, out, "Enter the distance from the energy source (AU): ")?,
    )?;

    Ok(SessionInputs {
        planet: planet.trim().to_string(),
        hot,
        cold,
        distance_au,
    })
}

/// Validate inputs and evaluate every formula for the chosen planet.
pub fn compute(
    inputs: &SessionInputs,
    tables: &GasTables,
    config: &SessionConfig,
) -> CycleResult<SessionReport> {
    let pair = ReservoirPair::new(inputs.hot, inputs.cold)?;
    let distance = OrbitalDistance::new(inputs.distance_au)?;

    let profile = tables.profile(&inputs.planet);
    let gamma = effective_gamma(&profile, &tables.gammas);

    let lambda = match lambda_ratio(&profile, &tables.gammas, pair.hot(), pair.cold()) {
        Ok(lambda) => Some(lambda),
        Err(CycleError::DegenerateGamma) => {
            log::warn!("{}: effective gamma is zero, lambda is undefined", inputs.planet);
            None
        }
        Err(err) => return Err(err),
    };

    let efficiency = efficiency_for(&pair, gamma);
    let heat_input = config.heat.heat_input_at(distance);

    Ok(SessionReport {
        planet: inputs.planet.clone(),
        gamma,
        lambda,
        efficiency,
        heat_input,
        power: power_output(efficiency, heat_input),
        gamma_bounds: gamma_bounds(&profile, &tables.gammas),
    })
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> CycleResult<String> {
    write!(out, "{}", label)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

fn parse_field(field: &'static str, raw: &str) -> CycleResult<f64> {
    let trimmed = raw.trim();
    trimmed.parse::<f64>().map_err(|_| CycleError::Parse {
        field,
        input: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use exocycle_logic::heat::HeatInputModel;
    use std::io::Cursor;

    fn run_with(script: &str, config: &SessionConfig) -> (CycleResult<SessionOutcome>, String) {
        let tables = GasTables::builtin().unwrap();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = run(&mut input, &mut out, &tables, config);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_earth_session_report() {
        let (result, output) = run_with("Earth\n500\n300\n2.0\n", &SessionConfig::default());
        let report = match result.unwrap() {
            SessionOutcome::Reported(r) => r,
            other => panic!("expected report, got {:?}", other),
        };
        assert_relative_eq!(report.gamma, 1.4027, epsilon = 1e-3);
        assert_eq!(report.heat_input, 0.25);
        assert_relative_eq!(report.power, report.efficiency * 0.25, epsilon = 1e-15);
        assert!(report.lambda.is_some());
        assert_eq!(
            report.gamma_bounds,
            Some(GammaBounds {
                max: 1.67,
                min: 1.4
            })
        );

        assert!(output.contains("Enter the planet name"));
        assert!(output.contains("Results for Earth:"));
        assert!(output.contains("Effective gamma:  1.4027"));
        assert!(output.contains("Heat input:       0.2500"));
    }

    #[test]
    fn test_hot_not_above_cold_is_rejected() {
        let (result, output) = run_with("Mars\n300\n300\n1.5\n", &SessionConfig::default());
        assert!(matches!(
            result.unwrap(),
            SessionOutcome::Rejected(CycleError::HotNotAboveCold { .. })
        ));
        assert!(output.contains("Error: hot reservoir temperature"));
        assert!(!output.contains("Results for"));
    }

    #[test]
    fn test_non_positive_distance_is_rejected() {
        let (result, output) = run_with("Venus\n700\n300\n0\n", &SessionConfig::default());
        assert!(matches!(
            result.unwrap(),
            SessionOutcome::Rejected(CycleError::NonPositiveDistance(_))
        ));
        assert!(output.contains("Error: distance"));
    }

    #[test]
    fn test_malformed_number_is_fatal() {
        let (result, _) = run_with("Earth\nhot\n300\n1\n", &SessionConfig::default());
        match result {
            Err(CycleError::Parse { field, input }) => {
                assert_eq!(field, "hot temperature");
                assert_eq!(input, "hot");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let (result, _) = run_with("Earth\n500\n", &SessionConfig::default());
        assert!(matches!(
            result,
            Err(CycleError::Parse {
                field: "cold temperature",
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_planet_degenerates() {
        let (result, output) = run_with("Vulcan\n600\n300\n1\n", &SessionConfig::default());
        let report = match result.unwrap() {
            SessionOutcome::Reported(r) => r,
            other => panic!("expected report, got {:?}", other),
        };
        assert_eq!(report.gamma, 0.0);
        assert_eq!(report.lambda, None);
        assert_eq!(report.gamma_bounds, None);
        assert!(!report.efficiency.is_finite());
        assert!(output.contains("Lambda ratio:     undefined"));
        assert!(!output.contains("Gamma range"));
    }

    #[test]
    fn test_planet_name_is_trimmed_and_case_insensitive() {
        let (result, _) = run_with("  jupiter  \n600\n300\n5.2\n", &SessionConfig::default());
        match result.unwrap() {
            SessionOutcome::Reported(r) => {
                assert_eq!(r.planet, "jupiter");
                assert!(r.gamma > 1.0);
            }
            other => panic!("expected report, got {:?}", other),
        }
    }

    #[test]
    fn test_heat_constant_override() {
        let config = SessionConfig {
            heat: HeatInputModel::with_constant(4.0),
            ..Default::default()
        };
        let (result, _) = run_with("Earth\n500\n300\n2\n", &config);
        match result.unwrap() {
            SessionOutcome::Reported(r) => assert_eq!(r.heat_input, 1.0),
            other => panic!("expected report, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_field_accepts_whitespace() {
        assert_eq!(parse_field("distance", "  1.5\r\n").unwrap(), 1.5);
        assert!(parse_field("distance", "1,5").is_err());
    }
}
