use crate::report::{money, opt_money};
use crate::types::input::{Category, IncomeBracket};
use crate::types::report::VerdictReport;
use crate::types::tables::RuleTables;

pub fn to_text(report: &VerdictReport) -> String {
    let metrics = &report.metrics;
    let mut output = String::new();
    output.push_str(&format!(
        "{}  {}/100\n{}\n{}\n\n",
        metrics.stamp, metrics.score, metrics.verdict_info.message, report.justification
    ));

    output.push_str(&format!(
        "price: {}  category: {}  uses: {}{}\n",
        money(metrics.price),
        metrics.category.as_str(),
        metrics.uses,
        if metrics.uses_estimated {
            " (estimated)"
        } else {
            ""
        }
    ));
    output.push_str(&format!(
        "cost per use: {}  cost per day: {}\n",
        opt_money(metrics.cost_per_use),
        opt_money(metrics.cost_per_day)
    ));
    if metrics.savings > 0.0 {
        output.push_str(&format!(
            "savings: {} ({:.0}% off)\n",
            money(metrics.savings),
            metrics.discount_percent
        ));
    } else {
        output.push_str("savings: —\n");
    }
    if let (Some(budget), Some(of_vibe)) = (metrics.budget, metrics.budget_percent_of_vibe) {
        output.push_str(&format!(
            "vibe budget: {}/mo, this purchase is {:.1}% of it\n",
            money(budget),
            of_vibe
        ));
    }

    output.push_str("\nbreakdown:\n");
    let breakdown = &metrics.breakdown;
    for (name, factor) in [
        ("price threshold", &breakdown.price_threshold),
        ("cost per use", &breakdown.cost_per_use),
        ("budget impact", &breakdown.budget_impact),
        ("discount/sale", &breakdown.discount_sale),
    ] {
        output.push_str(&format!(
            "  {}: {}/{} - {}\n",
            name, factor.points, factor.max, factor.rationale
        ));
    }
    output.push_str(&format!(
        "  category bonus: +{} - {}\n",
        breakdown.category_bonus.points, breakdown.category_bonus.rationale
    ));

    if !report.scenarios.is_empty() {
        output.push_str("\nwhat if:\n");
        for scenario in &report.scenarios {
            output.push_str(&format!(
                "  - {} {}/100 {}\n",
                scenario.description, scenario.score, scenario.stamp
            ));
        }
    }

    output
}

pub fn tables_to_text(tables: &RuleTables) -> String {
    let mut output = String::new();
    output.push_str(&format!("uses cap: {}\n\ncategories:\n", tables.uses_cap));
    for category in Category::ALL {
        output.push_str(&format!(
            "  {}: default uses {}, bonus +{}\n",
            category.as_str(),
            tables.default_uses(category),
            tables.bonus(category)
        ));
    }
    output.push_str("\nincome brackets:\n");
    for bracket in IncomeBracket::ALL {
        output.push_str(&format!(
            "  {}: midpoint {}/mo, impact multiplier {:.1}\n",
            bracket.as_str(),
            money(tables.midpoint(bracket)),
            tables.multiplier(bracket)
        ));
    }
    output.push_str("\nverdict tiers:\n");
    for score in [
        tables.tiers.approved_min,
        tables.tiers.justified_min,
        tables.tiers.questionable_min,
        0,
    ] {
        let info = tables.verdict_info(tables.verdict_for(score));
        output.push_str(&format!(
            "  {} ({}-{}): {}\n",
            info.stamp, info.min, info.max, info.message
        ));
    }
    output.push_str("\nvibe labels:\n");
    for percent in [5, 10, 15, 20, 25] {
        if let Some(label) = tables.vibe_label(percent) {
            output.push_str(&format!("  {percent}%: {label}\n"));
        }
    }
    output
}
