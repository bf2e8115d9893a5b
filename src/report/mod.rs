pub mod json;
pub mod md;

use crate::error::AgriskError;
use crate::tables::RiskTables;
use crate::types::report::AssessmentReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    /// Wire body: `score`, `reason`, `feature_contributions`.
    Json,
    Report,
    Md,
}

#[derive(Debug, Clone, Copy)]
pub enum TablesFormat {
    Json,
    Md,
}

pub fn render(report: &AssessmentReport, format: OutputFormat) -> Result<String, AgriskError> {
    match format {
        OutputFormat::Json => json::to_wire_json(&report.result).map_err(AgriskError::Json),
        OutputFormat::Report => json::to_report_json(report).map_err(AgriskError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_batch(
    reports: &[AssessmentReport],
    format: OutputFormat,
) -> Result<String, AgriskError> {
    match format {
        OutputFormat::Json => {
            let results = reports
                .iter()
                .map(|report| &report.result)
                .collect::<Vec<_>>();
            serde_json::to_string_pretty(&results).map_err(AgriskError::Json)
        }
        OutputFormat::Report => {
            serde_json::to_string_pretty(reports).map_err(AgriskError::Json)
        }
        OutputFormat::Md => Ok(reports
            .iter()
            .map(md::to_markdown)
            .collect::<Vec<_>>()
            .join("\n---\n\n")),
    }
}

pub fn render_tables(tables: &RiskTables, format: TablesFormat) -> Result<String, AgriskError> {
    match format {
        TablesFormat::Json => serde_json::to_string_pretty(tables).map_err(AgriskError::Json),
        TablesFormat::Md => Ok(md::tables_to_markdown(tables)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::RiskScorer;
    use crate::types::scoring::AssessmentInput;

    #[test]
    fn render_batch_json_is_array_of_wire_bodies() {
        let scorer = RiskScorer::builtin();
        let reports = vec![
            scorer.report(&AssessmentInput::new("Punjab", "Wheat", "normal")),
            scorer.report(&AssessmentInput::new("Gujarat", "Cotton", "drought")),
        ];
        let rendered = render_batch(&reports, OutputFormat::Json).expect("batch should render");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        let items = value.as_array().expect("array output");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["score"], 1.0);
        assert!(items[0].get("recommendations").is_none());
    }

    #[test]
    fn render_batch_markdown_separates_sections() {
        let scorer = RiskScorer::builtin();
        let reports = vec![
            scorer.report(&AssessmentInput::new("Punjab", "Wheat", "normal")),
            scorer.report(&AssessmentInput::new("Kerala", "Tea", "flood")),
        ];
        let rendered = render_batch(&reports, OutputFormat::Md).expect("batch should render");
        assert_eq!(rendered.matches("# Risk Assessment").count(), 2);
        assert!(rendered.contains("\n---\n"));
    }

    #[test]
    fn render_tables_json_lists_builtin_entries() {
        let rendered = render_tables(&RiskTables::builtin(), TablesFormat::Json)
            .expect("tables should render");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["location"]["entries"]["Gujarat"], 0.5);
        assert_eq!(value["crop"]["default"], 0.4);
        assert_eq!(value["scenario"]["profiles"]["drought"]["multiplier"], 2.0);
    }
}
