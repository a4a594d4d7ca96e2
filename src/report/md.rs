use crate::report::{money, opt_money};
use crate::types::input::{Category, IncomeBracket};
use crate::types::report::VerdictReport;
use crate::types::tables::RuleTables;

pub fn to_markdown(report: &VerdictReport) -> String {
    let metrics = &report.metrics;
    let mut output = String::new();
    output.push_str("# Girl Math Verdict\n\n");
    output.push_str(&format!("**{}** {}/100\n\n", metrics.stamp, metrics.score));
    output.push_str(&format!("> {}\n\n", metrics.verdict_info.message));
    output.push_str(&format!("{}\n\n", report.justification));

    output.push_str("## Metrics\n\n");
    output.push_str(&format!("- price: {}\n", money(metrics.price)));
    output.push_str(&format!(
        "- category: {}\n",
        metrics.category.as_str()
    ));
    output.push_str(&format!(
        "- uses: {}{}\n",
        metrics.uses,
        if metrics.uses_estimated {
            " (estimated)"
        } else {
            ""
        }
    ));
    output.push_str(&format!(
        "- cost per use: {}\n",
        opt_money(metrics.cost_per_use)
    ));
    output.push_str(&format!(
        "- cost per day: {}\n",
        opt_money(metrics.cost_per_day)
    ));
    if metrics.savings > 0.0 {
        output.push_str(&format!(
            "- savings: {} ({:.0}% off)\n",
            money(metrics.savings),
            metrics.discount_percent
        ));
    } else {
        output.push_str("- savings: —\n");
    }
    match (metrics.budget, metrics.budget_percent_of_vibe) {
        (Some(budget), Some(of_vibe)) => {
            output.push_str(&format!(
                "- vibe budget: {}/mo, this purchase is {:.1}% of it\n",
                money(budget),
                of_vibe
            ));
        }
        _ => output.push_str("- vibe budget: —\n"),
    }
    output.push('\n');

    output.push_str("## Score Breakdown\n\n");
    let breakdown = &metrics.breakdown;
    for (name, factor) in [
        ("price threshold", &breakdown.price_threshold),
        ("cost per use", &breakdown.cost_per_use),
        ("budget impact", &breakdown.budget_impact),
        ("discount/sale", &breakdown.discount_sale),
    ] {
        output.push_str(&format!(
            "- {}: {}/{} - {}\n",
            name, factor.points, factor.max, factor.rationale
        ));
    }
    output.push_str(&format!(
        "- category bonus: +{} - {}\n",
        breakdown.category_bonus.points, breakdown.category_bonus.rationale
    ));

    if !report.scenarios.is_empty() {
        output.push_str("\n## What If\n\n");
        for scenario in &report.scenarios {
            output.push_str(&format!(
                "- {} {}/100 {}\n",
                scenario.description, scenario.score, scenario.stamp
            ));
        }
    }

    output
}

pub fn tables_to_markdown(tables: &RuleTables) -> String {
    let mut output = String::new();
    output.push_str("# Girl Math Rule Tables\n\n");
    output.push_str(&format!("Uses cap: {}\n\n", tables.uses_cap));

    output.push_str("## Categories\n\n");
    for category in Category::ALL {
        output.push_str(&format!(
            "- {}: default uses {}, bonus +{}\n",
            category.as_str(),
            tables.default_uses(category),
            tables.bonus(category)
        ));
    }

    output.push_str("\n## Income Brackets\n\n");
    for bracket in IncomeBracket::ALL {
        output.push_str(&format!(
            "- {}: midpoint {}/mo, impact multiplier {:.1}\n",
            bracket.as_str(),
            money(tables.midpoint(bracket)),
            tables.multiplier(bracket)
        ));
    }

    output.push_str("\n## Verdict Tiers\n\n");
    for score in [
        tables.tiers.approved_min,
        tables.tiers.justified_min,
        tables.tiers.questionable_min,
        0,
    ] {
        let info = tables.verdict_info(tables.verdict_for(score));
        output.push_str(&format!(
            "- {} ({}-{}): {}\n",
            info.stamp, info.min, info.max, info.message
        ));
    }

    output.push_str("\n## Vibe Labels\n\n");
    for percent in [5, 10, 15, 20, 25] {
        if let Some(label) = tables.vibe_label(percent) {
            output.push_str(&format!("- {percent}%: {label}\n"));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate_metrics;
    use crate::engine::justify::justification;
    use crate::types::input::PurchaseInput;

    #[test]
    fn markdown_report_contains_sections() {
        let tables = RuleTables::default();
        let input = PurchaseInput {
            price: Some(600.0),
            category: Some(Category::Jewellery),
            ..PurchaseInput::default()
        };
        let metrics = calculate_metrics(&input, &tables);
        let report = VerdictReport {
            evaluated_at: None,
            justification: justification(metrics.verdict, metrics.category).to_string(),
            scenarios: Vec::new(),
            metrics,
        };

        let rendered = to_markdown(&report);
        assert!(rendered.contains("# Girl Math Verdict"));
        assert!(rendered.contains("## Score Breakdown"));
        // no usage data: cost per use renders as an em-dash placeholder
        assert!(rendered.contains("- cost per use: —"));
        assert!(rendered.contains("(estimated)"));
    }

    #[test]
    fn tables_markdown_lists_every_category_and_bracket() {
        let rendered = tables_to_markdown(&RuleTables::default());
        for category in Category::ALL {
            assert!(rendered.contains(category.as_str()));
        }
        for bracket in IncomeBracket::ALL {
            assert!(rendered.contains(bracket.as_str()));
        }
        assert!(rendered.contains("APPROVED"));
        assert!(rendered.contains("Soft life"));
    }
}
