use super::explain::{Factor, RankedFactor};
use crate::tables::Scenario;
use crate::types::report::{Priority, Recommendation};
use crate::types::scoring::RiskBand;

pub fn recommend(
    band: RiskBand,
    scenario: Scenario,
    ranked: &[RankedFactor],
) -> Vec<Recommendation> {
    let mut recommendations = match band {
        RiskBand::High => vec![
            Recommendation::new(
                "rec.band.insurance",
                "Secure Crop Insurance",
                "Enroll the field under a crop insurance scheme before the sowing deadline.",
                Priority::High,
            ),
            Recommendation::new(
                "rec.band.credit",
                "Review Credit Exposure",
                "Discuss repayment rescheduling or a smaller loan tranche with the lender.",
                Priority::High,
            ),
        ],
        RiskBand::Moderate => vec![Recommendation::new(
            "rec.band.monitor",
            "Monitor Field Conditions",
            "Track weather advisories and market prices weekly through the season.",
            Priority::Medium,
        )],
        RiskBand::Low => vec![Recommendation::new(
            "rec.band.maintain",
            "Maintain Current Practices",
            "Current practices carry low risk; keep records to support future credit.",
            Priority::Low,
        )],
    };

    match scenario {
        Scenario::Drought => recommendations.push(Recommendation::new(
            "rec.scenario.drought",
            "Conserve Water",
            "Adopt drip or sprinkler irrigation and mulching to reduce water demand.",
            Priority::High,
        )),
        Scenario::Flood => recommendations.push(Recommendation::new(
            "rec.scenario.flood",
            "Improve Drainage",
            "Clear field channels and raise bunds to limit waterlogging.",
            Priority::High,
        )),
        Scenario::Pest => recommendations.push(Recommendation::new(
            "rec.scenario.pest",
            "Apply Integrated Pest Management",
            "Scout fields regularly and combine traps with targeted treatment.",
            Priority::Medium,
        )),
        Scenario::Normal | Scenario::Other => {}
    }

    if band != RiskBand::Low {
        match ranked.first().map(|ranked| ranked.factor) {
            Some(Factor::Location) => recommendations.push(Recommendation::new(
                "rec.factor.location",
                "Spread Regional Exposure",
                "Regional conditions dominate the score; consider storage or alternate markets.",
                Priority::Medium,
            )),
            Some(Factor::Crop) => recommendations.push(Recommendation::new(
                "rec.factor.crop",
                "Diversify Crops",
                "The chosen crop dominates the score; intercrop or rotate with a lower-risk crop.",
                Priority::Medium,
            )),
            Some(Factor::Scenario) | None => {}
        }
    }

    sort_recommendations(&mut recommendations);
    recommendations
}

pub fn sort_recommendations(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(|left, right| {
        left.priority
            .cmp(&right.priority)
            .then_with(|| left.id.cmp(&right.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::explain::ranked_factors;
    use crate::types::scoring::Contributions;

    fn crop_led() -> Vec<RankedFactor> {
        ranked_factors(&Contributions {
            location: 0.3,
            crop: 0.5,
            scenario: 0.2,
        })
    }

    fn ids(recommendations: &[Recommendation]) -> Vec<&str> {
        recommendations
            .iter()
            .map(|recommendation| recommendation.id.as_str())
            .collect()
    }

    #[test]
    fn high_drought_recommends_insurance_and_water_conservation() {
        let recommendations = recommend(RiskBand::High, Scenario::Drought, &crop_led());
        assert_eq!(
            ids(&recommendations),
            vec![
                "rec.band.credit",
                "rec.band.insurance",
                "rec.scenario.drought",
                "rec.factor.crop",
            ]
        );
    }

    #[test]
    fn low_normal_recommends_maintaining_practices_only() {
        let recommendations = recommend(RiskBand::Low, Scenario::Normal, &crop_led());
        assert_eq!(ids(&recommendations), vec!["rec.band.maintain"]);
    }

    #[test]
    fn unknown_scenario_adds_no_scenario_advice() {
        let recommendations = recommend(RiskBand::Moderate, Scenario::Other, &crop_led());
        assert!(recommendations
            .iter()
            .all(|recommendation| !recommendation.id.starts_with("rec.scenario")));
    }

    #[test]
    fn recommendations_are_sorted_by_priority() {
        let recommendations = recommend(RiskBand::Moderate, Scenario::Flood, &crop_led());
        assert!(recommendations
            .windows(2)
            .all(|pair| pair[0].priority <= pair[1].priority));
        assert_eq!(recommendations[0].id, "rec.scenario.flood");
    }
}
