use crate::scoring::explain::RankedFactor;
use crate::types::scoring::{AssessmentInput, AssessmentResult, RiskBand};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub priority: Priority,
}

impl Recommendation {
    pub fn new(id: &str, title: &str, summary: &str, priority: Priority) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
            priority,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub input: AssessmentInput,
    #[serde(flatten)]
    pub result: AssessmentResult,
    pub band: RiskBand,
    pub risk_category: &'static str,
    pub factors: Vec<RankedFactor>,
    pub summary: String,
    pub recommendations: Vec<Recommendation>,
    pub generated_at: String,
}
