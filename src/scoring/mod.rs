pub mod explain;
pub mod recommend;

use crate::tables::{RiskTables, Scenario, ScenarioProfile};
use crate::types::config::AgriskConfig;
use crate::types::report::AssessmentReport;
use crate::types::scoring::{AssessmentInput, AssessmentResult, Contributions, RiskBand, Score};
use chrono::Utc;

/// Share of attribution mass given to each factor before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributionWeights {
    pub location: f64,
    pub crop: f64,
    pub scenario: f64,
}

impl Default for AttributionWeights {
    fn default() -> Self {
        let [location, crop, scenario] = AgriskConfig::default_attribution();
        Self {
            location,
            crop,
            scenario,
        }
    }
}

impl AttributionWeights {
    pub fn from_config(cfg: &AgriskConfig) -> Self {
        let [location, crop, scenario] = cfg.attribution();
        Self {
            location,
            crop,
            scenario,
        }
    }
}

/// Intermediate values resolved from the tables for one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskFactors {
    pub location_risk: f64,
    pub crop_risk: f64,
    pub scenario: ScenarioProfile,
    pub base_score: Score,
}

#[derive(Debug, Clone)]
pub struct RiskScorer<'a> {
    tables: &'a RiskTables,
    weights: AttributionWeights,
}

impl RiskScorer<'static> {
    pub fn builtin() -> Self {
        Self::new(RiskTables::shared(), AttributionWeights::default())
    }
}

impl<'a> RiskScorer<'a> {
    pub fn new(tables: &'a RiskTables, weights: AttributionWeights) -> Self {
        Self { tables, weights }
    }

    pub fn factors(&self, input: &AssessmentInput) -> RiskFactors {
        let location_risk = self.tables.location.lookup(&input.location);
        let crop_risk = self.tables.crop.lookup(&input.crop);
        let scenario = self.tables.scenario.lookup(&input.scenario);
        RiskFactors {
            location_risk,
            crop_risk,
            scenario,
            base_score: (location_risk + crop_risk) / 2.0,
        }
    }

    pub fn assess(&self, input: &AssessmentInput) -> AssessmentResult {
        let factors = self.factors(input);
        let score = final_score(&factors);
        let feature_contributions = self.contributions(&factors);
        let band = RiskBand::from_score(score);

        tracing::debug!(
            location = %input.location,
            crop = %input.crop,
            scenario = %input.scenario,
            score,
            band = band.label(),
            "assessment computed"
        );

        AssessmentResult {
            score,
            reason: explain::reason(band, input),
            feature_contributions,
        }
    }

    /// Scores `input` and attaches the ranked factors, narrative and recommendations.
    pub fn report(&self, input: &AssessmentInput) -> AssessmentReport {
        let result = self.assess(input);
        let band = RiskBand::from_score(result.score);
        let factors = explain::ranked_factors(&result.feature_contributions);
        let summary = explain::summary(band, &factors, input);
        let recommendations =
            recommend::recommend(band, Scenario::from_name(&input.scenario), &factors);

        AssessmentReport {
            input: input.clone(),
            result,
            band,
            risk_category: band.category(),
            factors,
            summary,
            recommendations,
            generated_at: Utc::now().to_rfc3339(),
        }
    }

    /// The multiplier shapes the score only; attribution sees the direct scenario risk.
    fn contributions(&self, factors: &RiskFactors) -> Contributions {
        let location = factors.location_risk * self.weights.location;
        let crop = factors.crop_risk * self.weights.crop;
        let scenario = factors.scenario.direct_risk * self.weights.scenario;

        let total = location + crop + scenario;
        if total <= 0.0 {
            return Contributions::even();
        }

        Contributions {
            location: location / total,
            crop: crop / total,
            scenario: scenario / total,
        }
    }
}

fn final_score(factors: &RiskFactors) -> Score {
    (factors.base_score * factors.scenario.multiplier + factors.scenario.direct_risk).min(1.0)
}

/// Scores `input` against the builtin tables and default attribution weights.
pub fn assess(input: &AssessmentInput) -> AssessmentResult {
    RiskScorer::builtin().assess(input)
}
