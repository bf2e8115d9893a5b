use crate::error::Result;
use crate::types::config::AgriskConfig;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const DEFAULT_LOCATION_RISK: f64 = 0.4;
pub const DEFAULT_CROP_RISK: f64 = 0.4;

const LOCATIONS: [(&str, f64); 10] = [
    ("Maharashtra", 0.4),
    ("Punjab", 0.3),
    ("Haryana", 0.35),
    ("Uttar Pradesh", 0.45),
    ("Karnataka", 0.25),
    ("Tamil Nadu", 0.3),
    ("Andhra Pradesh", 0.4),
    ("Gujarat", 0.5),
    ("West Bengal", 0.6),
    ("Madhya Pradesh", 0.55),
];

const CROPS: [(&str, f64); 10] = [
    ("Rice", 0.4),
    ("Wheat", 0.3),
    ("Cotton", 0.6),
    ("Sugarcane", 0.35),
    ("Maize", 0.25),
    ("Pulses", 0.3),
    ("Oilseeds", 0.45),
    ("Vegetables", 0.5),
    ("Fruits", 0.4),
    ("Spices", 0.55),
];

/// Immutable key to weight mapping with a fallback for unknown keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskFactorTable {
    entries: BTreeMap<String, f64>,
    default: f64,
}

impl RiskFactorTable {
    pub fn new<K: Into<String>>(
        entries: impl IntoIterator<Item = (K, f64)>,
        default: f64,
    ) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, weight)| (key.into(), weight))
                .collect(),
            default,
        }
    }

    /// Exact, case-sensitive match; unknown keys resolve to the default.
    pub fn lookup(&self, key: &str) -> f64 {
        match self.entries.get(key) {
            Some(weight) => *weight,
            None => {
                tracing::debug!(key, fallback = self.default, "risk table fallback");
                self.default
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn default_weight(&self) -> f64 {
        self.default
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(key, weight)| (key.as_str(), *weight))
    }

    fn overlay(&mut self, overrides: &BTreeMap<String, f64>, default: Option<f64>) {
        for (key, weight) in overrides {
            self.entries.insert(key.clone(), *weight);
        }
        if let Some(default) = default {
            self.default = default;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioProfile {
    pub multiplier: f64,
    pub direct_risk: f64,
}

impl ScenarioProfile {
    pub const fn new(multiplier: f64, direct_risk: f64) -> Self {
        Self {
            multiplier,
            direct_risk,
        }
    }
}

/// Recognized environmental scenarios. Anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    Normal,
    Drought,
    Flood,
    Pest,
    Other,
}

impl Scenario {
    pub const KNOWN: [Scenario; 4] = [
        Scenario::Normal,
        Scenario::Drought,
        Scenario::Flood,
        Scenario::Pest,
    ];

    pub fn from_name(name: &str) -> Self {
        match name {
            "normal" => Scenario::Normal,
            "drought" => Scenario::Drought,
            "flood" => Scenario::Flood,
            "pest" => Scenario::Pest,
            _ => Scenario::Other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Normal => "normal",
            Scenario::Drought => "drought",
            Scenario::Flood => "flood",
            Scenario::Pest => "pest",
            Scenario::Other => "other",
        }
    }

    pub fn builtin_profile(&self) -> ScenarioProfile {
        match self {
            Scenario::Normal => ScenarioProfile::new(1.0, 0.1),
            Scenario::Drought => ScenarioProfile::new(2.0, 0.5),
            Scenario::Flood => ScenarioProfile::new(1.8, 0.45),
            Scenario::Pest => ScenarioProfile::new(1.6, 0.4),
            Scenario::Other => ScenarioProfile::new(1.0, 0.1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioTable {
    profiles: BTreeMap<String, ScenarioProfile>,
    default: ScenarioProfile,
}

impl ScenarioTable {
    pub fn builtin() -> Self {
        Self {
            profiles: Scenario::KNOWN
                .iter()
                .map(|scenario| (scenario.name().to_string(), scenario.builtin_profile()))
                .collect(),
            default: Scenario::Other.builtin_profile(),
        }
    }

    pub fn lookup(&self, name: &str) -> ScenarioProfile {
        match self.profiles.get(name) {
            Some(profile) => *profile,
            None => {
                tracing::debug!(
                    scenario = name,
                    multiplier = self.default.multiplier,
                    direct_risk = self.default.direct_risk,
                    "scenario table fallback"
                );
                self.default
            }
        }
    }

    pub fn default_profile(&self) -> ScenarioProfile {
        self.default
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, ScenarioProfile)> {
        self.profiles
            .iter()
            .map(|(name, profile)| (name.as_str(), *profile))
    }
}

/// The three lookup tables the scorer reads. Built once, shared read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskTables {
    pub location: RiskFactorTable,
    pub crop: RiskFactorTable,
    pub scenario: ScenarioTable,
}

impl RiskTables {
    pub fn builtin() -> Self {
        Self {
            location: RiskFactorTable::new(LOCATIONS, DEFAULT_LOCATION_RISK),
            crop: RiskFactorTable::new(CROPS, DEFAULT_CROP_RISK),
            scenario: ScenarioTable::builtin(),
        }
    }

    pub fn shared() -> &'static RiskTables {
        static TABLES: OnceLock<RiskTables> = OnceLock::new();
        TABLES.get_or_init(RiskTables::builtin)
    }

    /// Builtin tables overlaid with the configured entries and defaults.
    pub fn from_config(cfg: &AgriskConfig) -> Result<Self> {
        cfg.validate()?;

        let mut tables = Self::builtin();
        let Some(overrides) = &cfg.tables else {
            return Ok(tables);
        };
        let defaults = overrides.defaults.clone().unwrap_or_default();

        tables.location.overlay(&overrides.locations, defaults.location);
        tables.crop.overlay(&overrides.crops, defaults.crop);

        for (name, profile) in &overrides.scenarios {
            tables.scenario.profiles.insert(
                name.clone(),
                ScenarioProfile::new(profile.multiplier, profile.direct_risk),
            );
        }
        if let Some(multiplier) = defaults.scenario_multiplier {
            tables.scenario.default.multiplier = multiplier;
        }
        if let Some(direct_risk) = defaults.scenario_direct_risk {
            tables.scenario.default.direct_risk = direct_risk;
        }

        Ok(tables)
    }
}
