use crate::error::AgriskError;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgriskConfig {
    pub tables: Option<TablesConfig>,
    pub attribution: Option<AttributionConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TablesConfig {
    #[serde(default)]
    pub locations: BTreeMap<String, f64>,
    #[serde(default)]
    pub crops: BTreeMap<String, f64>,
    #[serde(default)]
    pub scenarios: BTreeMap<String, ScenarioProfileConfig>,
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScenarioProfileConfig {
    pub multiplier: f64,
    pub direct_risk: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultsConfig {
    pub location: Option<f64>,
    pub crop: Option<f64>,
    pub scenario_multiplier: Option<f64>,
    pub scenario_direct_risk: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttributionConfig {
    pub location: Option<f64>,
    pub crop: Option<f64>,
    pub scenario: Option<f64>,
}

impl AgriskConfig {
    pub fn default_attribution() -> [f64; 3] {
        [0.40, 0.40, 0.20]
    }

    /// Attribution weights in `[location, crop, scenario]` order.
    pub fn attribution(&self) -> [f64; 3] {
        let defaults = Self::default_attribution();
        match &self.attribution {
            Some(attribution) => [
                attribution.location.unwrap_or(defaults[0]),
                attribution.crop.unwrap_or(defaults[1]),
                attribution.scenario.unwrap_or(defaults[2]),
            ],
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), AgriskError> {
        let weights = self.attribution();
        if weights.iter().any(|weight| !(0.0..=1.0).contains(weight)) {
            return Err(AgriskError::ConfigParse(
                "attribution values must be between 0.0 and 1.0".to_string(),
            ));
        }
        let weight_sum: f64 = weights.iter().sum();
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(AgriskError::ConfigParse(format!(
                "attribution weights must sum to 1.0 (found {:.3})",
                weight_sum
            )));
        }

        if let Some(tables) = &self.tables {
            validate_weights("tables.locations", &tables.locations)?;
            validate_weights("tables.crops", &tables.crops)?;

            for (name, profile) in &tables.scenarios {
                if name.is_empty() {
                    return Err(AgriskError::ConfigParse(
                        "tables.scenarios entries must have non-empty names".to_string(),
                    ));
                }
                validate_multiplier(
                    &format!("tables.scenarios.{name}.multiplier"),
                    profile.multiplier,
                )?;
                validate_unit(
                    &format!("tables.scenarios.{name}.direct_risk"),
                    profile.direct_risk,
                )?;
            }

            if let Some(defaults) = &tables.defaults {
                if let Some(location) = defaults.location {
                    validate_unit("tables.defaults.location", location)?;
                }
                if let Some(crop) = defaults.crop {
                    validate_unit("tables.defaults.crop", crop)?;
                }
                if let Some(multiplier) = defaults.scenario_multiplier {
                    validate_multiplier("tables.defaults.scenario_multiplier", multiplier)?;
                }
                if let Some(direct_risk) = defaults.scenario_direct_risk {
                    validate_unit("tables.defaults.scenario_direct_risk", direct_risk)?;
                }
            }
        }

        Ok(())
    }
}

fn validate_weights(section: &str, weights: &BTreeMap<String, f64>) -> Result<(), AgriskError> {
    for (key, weight) in weights {
        if key.is_empty() {
            return Err(AgriskError::ConfigParse(format!(
                "{section} entries must have non-empty names"
            )));
        }
        validate_unit(&format!("{section}.{key}"), *weight)?;
    }
    Ok(())
}

fn validate_unit(field: &str, value: f64) -> Result<(), AgriskError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(AgriskError::ConfigParse(format!(
            "{field} must be between 0.0 and 1.0 (found {value})"
        )));
    }
    Ok(())
}

fn validate_multiplier(field: &str, value: f64) -> Result<(), AgriskError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AgriskError::ConfigParse(format!(
            "{field} must be a finite value >= 0.0 (found {value})"
        )));
    }
    Ok(())
}
