use crate::tables::Scenario;
use crate::types::scoring::{AssessmentInput, Contributions, RiskBand, Score};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Factor {
    Location,
    Crop,
    Scenario,
}

impl Factor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Factor::Location => "location",
            Factor::Crop => "crop",
            Factor::Scenario => "scenario",
        }
    }

    fn describe(&self, input: &AssessmentInput) -> String {
        match self {
            Factor::Location => format!("regional conditions in {}", input.location),
            Factor::Crop => format!("the risk profile of {}", input.crop),
            Factor::Scenario => format!("{} scenario exposure", input.scenario),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedFactor {
    pub factor: Factor,
    pub share: Score,
}

pub fn reason(band: RiskBand, input: &AssessmentInput) -> String {
    format!(
        "{} risk detected for {} cultivation in {} under {} conditions.",
        band.label(),
        input.crop,
        input.location,
        input.scenario
    )
}

/// Largest share first; equal shares keep location, crop, scenario order.
pub fn ranked_factors(contributions: &Contributions) -> Vec<RankedFactor> {
    let mut ranked = vec![
        RankedFactor {
            factor: Factor::Location,
            share: contributions.location,
        },
        RankedFactor {
            factor: Factor::Crop,
            share: contributions.crop,
        },
        RankedFactor {
            factor: Factor::Scenario,
            share: contributions.scenario,
        },
    ];
    ranked.sort_by(|left, right| right.share.total_cmp(&left.share));
    ranked
}

fn scenario_context(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Normal => " under normal conditions",
        Scenario::Drought => " under drought conditions",
        Scenario::Flood => " in flood-affected areas",
        Scenario::Pest => " under pest outbreak pressure",
        Scenario::Other => "",
    }
}

/// Longer narrative naming the two largest contributors.
pub fn summary(band: RiskBand, ranked: &[RankedFactor], input: &AssessmentInput) -> String {
    let lead = match band {
        RiskBand::High => "High risk assessment due to",
        RiskBand::Moderate => "Medium risk level influenced by",
        RiskBand::Low => "Low risk profile based on",
    };

    let drivers = ranked
        .iter()
        .filter(|ranked| ranked.share > 0.0)
        .take(2)
        .map(|ranked| {
            format!(
                "{} ({:.0}%)",
                ranked.factor.describe(input),
                ranked.share * 100.0
            )
        })
        .collect::<Vec<_>>();

    let mut text = match drivers.as_slice() {
        [] => format!("{lead} no dominant factor"),
        [only] => format!("{lead} {only}"),
        [first, second, ..] => format!("{lead} {first} and {second}"),
    };
    text.push_str(scenario_context(Scenario::from_name(&input.scenario)));
    text.push('.');
    text
}
