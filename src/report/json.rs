use crate::types::report::VerdictReport;

pub fn to_json(report: &VerdictReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate_metrics;
    use crate::engine::justify::justification;
    use crate::types::input::{Category, PurchaseInput};
    use crate::types::tables::RuleTables;

    #[test]
    fn json_report_exposes_score_and_verdict() {
        let tables = RuleTables::default();
        let input = PurchaseInput {
            price: Some(20.0),
            category: Some(Category::Clothes),
            uses: Some(40.0),
            ..PurchaseInput::default()
        };
        let metrics = calculate_metrics(&input, &tables);
        let report = VerdictReport {
            evaluated_at: None,
            justification: justification(metrics.verdict, metrics.category).to_string(),
            scenarios: Vec::new(),
            metrics,
        };

        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"score\": 71"));
        assert!(rendered.contains("\"verdict\": \"approved\""));
        assert!(rendered.contains("\"cost_per_use\": 0.5"));
        // absent values serialize as null, not zero
        assert!(rendered.contains("\"budget\": null"));
    }
}
