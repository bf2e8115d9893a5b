use serde::{Deserialize, Serialize};

pub type Score = f64;

fn default_scenario() -> String {
    "normal".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub location: String,
    pub crop: String,
    #[serde(default = "default_scenario")]
    pub scenario: String,
}

impl AssessmentInput {
    pub fn new(location: &str, crop: &str, scenario: &str) -> Self {
        Self {
            location: location.to_string(),
            crop: crop.to_string(),
            scenario: scenario.to_string(),
        }
    }
}

/// Normalized attribution shares. The three fields sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contributions {
    pub location: Score,
    pub crop: Score,
    pub scenario: Score,
}

impl Contributions {
    pub fn even() -> Self {
        Self {
            location: 1.0 / 3.0,
            crop: 1.0 / 3.0,
            scenario: 1.0 / 3.0,
        }
    }

    pub fn total(&self) -> Score {
        self.location + self.crop + self.scenario
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub score: Score,
    pub reason: String,
    pub feature_contributions: Contributions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub fn from_score(score: Score) -> Self {
        if score < 0.3 {
            RiskBand::Low
        } else if score < 0.7 {
            RiskBand::Moderate
        } else {
            RiskBand::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low",
            RiskBand::Moderate => "Moderate",
            RiskBand::High => "High",
        }
    }

    /// Category vocabulary used by API consumers.
    pub fn category(&self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Moderate => "medium",
            RiskBand::High => "high",
        }
    }
}
