use crate::tables::RiskTables;
use crate::types::report::AssessmentReport;

pub fn to_markdown(report: &AssessmentReport) -> String {
    let mut output = String::new();
    output.push_str("# Risk Assessment\n\n");
    output.push_str(&format!(
        "- location: {}\n- crop: {}\n- scenario: {}\n\n",
        report.input.location, report.input.crop, report.input.scenario
    ));
    output.push_str(&format!(
        "Score: {:.3} ({})\n\n",
        report.result.score,
        report.band.label()
    ));
    output.push_str(&format!("{}\n\n", report.result.reason));

    output.push_str("## Contributions\n\n");
    for ranked in &report.factors {
        output.push_str(&format!(
            "- {}: {:.1}%\n",
            ranked.factor.as_str(),
            ranked.share * 100.0
        ));
    }
    output.push('\n');

    output.push_str("## Summary\n\n");
    output.push_str(&format!("{}\n\n", report.summary));

    output.push_str("## Recommendations\n\n");
    if report.recommendations.is_empty() {
        output.push_str("- none\n");
    } else {
        for recommendation in &report.recommendations {
            output.push_str(&format!(
                "- {} ({:?}): {}\n",
                recommendation.title, recommendation.priority, recommendation.summary
            ));
        }
    }

    output
}

pub fn tables_to_markdown(tables: &RiskTables) -> String {
    let mut output = String::new();
    output.push_str("# Risk Tables\n\n");

    for (title, table) in [("Locations", &tables.location), ("Crops", &tables.crop)] {
        output.push_str(&format!("## {title}\n\n| key | weight |\n|---|---|\n"));
        for (key, weight) in table.entries() {
            output.push_str(&format!("| {key} | {weight:.2} |\n"));
        }
        output.push_str(&format!("| (default) | {:.2} |\n\n", table.default_weight()));
    }

    output.push_str("## Scenarios\n\n| scenario | multiplier | direct risk |\n|---|---|---|\n");
    for (name, profile) in tables.scenario.entries() {
        output.push_str(&format!(
            "| {name} | {:.2} | {:.2} |\n",
            profile.multiplier, profile.direct_risk
        ));
    }
    let fallback = tables.scenario.default_profile();
    output.push_str(&format!(
        "| (default) | {:.2} | {:.2} |\n",
        fallback.multiplier, fallback.direct_risk
    ));

    output
}
