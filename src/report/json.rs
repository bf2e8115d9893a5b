use crate::types::report::AssessmentReport;
use crate::types::scoring::AssessmentResult;

pub fn to_wire_json(result: &AssessmentResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

pub fn to_report_json(report: &AssessmentReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::RiskScorer;
    use crate::types::scoring::AssessmentInput;

    #[test]
    fn wire_json_has_exactly_contract_fields() {
        let result =
            RiskScorer::builtin().assess(&AssessmentInput::new("Punjab", "Wheat", "normal"));
        let rendered = to_wire_json(&result).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        let mut keys = value
            .as_object()
            .expect("object output")
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        keys.sort();
        assert_eq!(keys, vec!["feature_contributions", "reason", "score"]);
    }

    #[test]
    fn report_json_flattens_result_and_adds_metadata() {
        let report =
            RiskScorer::builtin().report(&AssessmentInput::new("Karnataka", "Maize", "pest"));
        let rendered = to_report_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"risk_category\": \"high\""));
        assert!(rendered.contains("\"band\": \"high\""));
        assert!(rendered.contains("\"feature_contributions\""));
        assert!(rendered.contains("\"generated_at\""));
        assert!(rendered.contains("\"rec.scenario.pest\""));
    }
}
