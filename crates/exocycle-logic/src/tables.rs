//! Gas property tables — heat-capacity ratios and planetary atmospheres.
//!
//! Both tables are compiled into the binary as JSON and deserialized once at
//! startup into [`GasTables`]. Callers hold the loaded tables by reference;
//! nothing mutates them afterwards.
//!
//! ```
//! use exocycle_logic::tables::GasTables;
//!
//! let tables = GasTables::builtin().unwrap();
//! let earth = tables.profile("Earth");
//! assert_eq!(earth.percentage("N2"), Some(78.0));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CycleError, CycleResult};

/// Built-in gas and planet data.
const GAS_TABLES_JSON: &str = include_str!("../../../data/gas_tables.json");

/// Heat-capacity ratio (gamma) per gas.
///
/// `None` marks a gas whose ratio is undefined or not constant over the
/// temperatures of interest. Such gases never contribute to a mixture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GasTable(BTreeMap<String, Option<f64>>);

impl GasTable {
    /// Defined gamma for `gas`, or `None` if unlisted or undefined.
    pub fn gamma(&self, gas: &str) -> Option<f64> {
        self.0.get(gas).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Option<f64>)> for GasTable {
    fn from_iter<I: IntoIterator<Item = (String, Option<f64>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Atmospheric composition of one planet: gas → percentage.
///
/// Percentages are not required to sum to 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AtmosphereProfile(BTreeMap<String, f64>);

impl AtmosphereProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of `gas` in this atmosphere.
    pub fn percentage(&self, gas: &str) -> Option<f64> {
        self.0.get(gas).copied()
    }

    /// Iterate `(gas, percentage)` in gas-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(gas, pct)| (gas.as_str(), *pct))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for AtmosphereProfile {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, f64); N]> for AtmosphereProfile {
    fn from(entries: [(&str, f64); N]) -> Self {
        entries
            .into_iter()
            .map(|(gas, pct)| (gas.to_string(), pct))
            .collect()
    }
}

/// The gamma table plus the planet → atmosphere catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GasTables {
    pub gammas: GasTable,
    pub planets: BTreeMap<String, AtmosphereProfile>,
}

impl GasTables {
    /// Load and validate the tables compiled into the crate.
    pub fn builtin() -> CycleResult<Self> {
        Self::from_json(GAS_TABLES_JSON)
    }

    /// Parse tables from JSON and validate every entry.
    pub fn from_json(json: &str) -> CycleResult<Self> {
        let tables: GasTables = serde_json::from_str(json)?;
        tables.validate()?;
        log::debug!(
            "loaded {} gases and {} planets",
            tables.gammas.len(),
            tables.planets.len()
        );
        Ok(tables)
    }

    /// Reject non-physical data: gammas must be finite and positive,
    /// percentages finite and non-negative.
    pub fn validate(&self) -> CycleResult<()> {
        for (gas, gamma) in &self.gammas.0 {
            if let Some(g) = gamma {
                if !g.is_finite() || *g <= 0.0 {
                    return Err(CycleError::InvalidTable {
                        key: gas.clone(),
                        reason: format!("gamma {} is not a positive finite number", g),
                    });
                }
            }
        }

        for (planet, profile) in &self.planets {
            for (gas, pct) in profile.iter() {
                if !pct.is_finite() || pct < 0.0 {
                    return Err(CycleError::InvalidTable {
                        key: format!("{}/{}", planet, gas),
                        reason: format!("percentage {} is not a non-negative finite number", pct),
                    });
                }
            }
        }

        Ok(())
    }

    /// Atmosphere for a planet, matched case-insensitively after trimming.
    ///
    /// Unknown planets resolve to an empty profile rather than an error.
    pub fn profile(&self, planet: &str) -> AtmosphereProfile {
        let wanted = planet.trim();
        match self
            .planets
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
        {
            Some((_, profile)) => profile.clone(),
            None => {
                log::warn!("unknown planet {:?}, using an empty atmosphere", wanted);
                AtmosphereProfile::new()
            }
        }
    }

    /// Known planet names in catalog order.
    pub fn planet_names(&self) -> Vec<&str> {
        self.planets.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_load() {
        let tables = GasTables::builtin().unwrap();
        assert!(tables.planets.len() >= 8);
        assert_eq!(tables.gammas.gamma("N2"), Some(1.4));
        assert_eq!(tables.gammas.gamma("Ar"), Some(1.67));
    }

    #[test]
    fn test_earth_profile() {
        let tables = GasTables::builtin().unwrap();
        let earth = tables.profile("Earth");
        assert_eq!(earth.len(), 3);
        assert_eq!(earth.percentage("O2"), Some(21.0));
        assert_eq!(earth.percentage("Ar"), Some(1.0));
    }

    #[test]
    fn test_planet_lookup_ignores_case_and_whitespace() {
        let tables = GasTables::builtin().unwrap();
        assert_eq!(tables.profile("  mars\n"), tables.profile("Mars"));
        assert!(!tables.profile("MARS").is_empty());
    }

    #[test]
    fn test_unknown_planet_is_empty() {
        let tables = GasTables::builtin().unwrap();
        assert!(tables.profile("Vulcan").is_empty());
        assert!(tables.profile("").is_empty());
    }

    #[test]
    fn test_undefined_gamma_sentinel() {
        let tables = GasTables::builtin().unwrap();
        assert_eq!(tables.gammas.gamma("Na"), None);
        assert_eq!(tables.gammas.gamma("K"), None);
        assert_eq!(tables.gammas.gamma("NH4"), None);
        // Mercury lists Na and K, which have no constant gamma.
        assert!(tables.profile("Mercury").percentage("Na").is_some());
    }

    #[test]
    fn test_planet_names_sorted() {
        let tables = GasTables::builtin().unwrap();
        let names = tables.planet_names();
        assert!(names.contains(&"Earth"));
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_rejects_negative_percentage() {
        let json = r#"{"gammas": {"N2": 1.4}, "planets": {"Bad": {"N2": -5.0}}}"#;
        let err = GasTables::from_json(json).unwrap_err();
        assert!(matches!(err, CycleError::InvalidTable { .. }));
    }

    #[test]
    fn test_rejects_zero_gamma() {
        let json = r#"{"gammas": {"X": 0.0}, "planets": {}}"#;
        let err = GasTables::from_json(json).unwrap_err();
        assert!(matches!(err, CycleError::InvalidTable { ref key, .. } if key == "X"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GasTables::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CycleError::Tables(_)));
    }

    #[test]
    fn test_profile_from_array() {
        let profile = AtmosphereProfile::from([("N2", 50.0), ("He", 50.0)]);
        assert_eq!(profile.len(), 2);
        let gases: Vec<&str> = profile.iter().map(|(g, _)| g).collect();
        assert_eq!(gases, vec!["He", "N2"]);
    }
}
