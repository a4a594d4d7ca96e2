pub mod budget;
pub mod cost_per_use;
pub mod discount;
pub mod justify;
pub mod normalize;
pub mod price;

use tracing::debug;

use crate::types::input::{Category, Mode, PurchaseInput};
use crate::types::metrics::{BonusScore, Metrics, ScoreBreakdown};
use crate::types::tables::RuleTables;

/// Evaluate one purchase. Total over its input domain: malformed and missing
/// fields degrade to documented defaults, and the function never fails.
pub fn calculate_metrics(input: &PurchaseInput, tables: &RuleTables) -> Metrics {
    let price = normalize::coerce_amount(input.price);
    let original_price = normalize::coerce_amount(input.original_price);
    let category = input.category.unwrap_or(Category::Other);
    let mode = input.mode.unwrap_or(Mode::Softlife);

    // Effective uses: the supplied count when it normalizes, else the
    // category default. The cap applies to both sources.
    let supplied_uses = input
        .uses
        .and_then(|raw| normalize::normalize_uses(raw, tables.uses_cap));
    let uses_provided = supplied_uses.is_some();
    let uses = supplied_uses
        .or_else(|| {
            normalize::normalize_uses(f64::from(tables.default_uses(category)), tables.uses_cap)
        })
        .unwrap_or(1);
    let uses_estimated = !uses_provided;

    // An estimated default must never be presented as a measured cost-per-use.
    let cost_per_use = supplied_uses.map(|n| price / f64::from(n));
    // Skincare assumes a 30-day supply cycle.
    let cost_per_day = (category == Category::Skincare).then(|| price / 30.0);

    let (savings, discount_percent) =
        discount::resolve_savings(price, original_price, input.discount_percent);

    let income = input.income;
    let budget_percent = if input.skip_vibe {
        None
    } else {
        input.budget_percent.filter(|p| *p > 0)
    };
    let (budget, budget_percent_of_vibe) = match (income, budget_percent) {
        (Some(bracket), Some(percent)) => {
            let budget = tables.midpoint(bracket) * f64::from(percent) / 100.0;
            let of_vibe = if budget > 0.0 {
                price / budget * 100.0
            } else {
                0.0
            };
            (Some(budget), Some(of_vibe))
        }
        _ => (None, None),
    };

    // Four factors, each computed from the metrics alone, never from another
    // factor's score.
    let price_threshold = price::price_threshold_score(price);
    let cost_per_use_factor = cost_per_use::cost_per_use_score(cost_per_use);
    let budget_impact = budget::budget_impact_score(price, budget, income, tables);
    let discount_sale = discount::discount_sale_score(discount_percent);

    let base_score = price_threshold.points
        + cost_per_use_factor.points
        + budget_impact.points
        + discount_sale.points;

    // Category bonus with tier protection: the bonus may promote the verdict
    // by at most one tier.
    let bonus = tables.bonus(category);
    let base_tier = tables.tier_index(base_score);
    let raw_final = base_score + bonus;
    let mut final_score = raw_final.min(100);
    if tables.tier_index(final_score) > base_tier + 1 {
        final_score = tables.tier_cap(base_tier);
        debug!(
            base_score,
            bonus, final_score, "category bonus capped by tier protection"
        );
    }

    let bonus_points = final_score - base_score;
    let category_bonus = BonusScore {
        points: bonus_points,
        rationale: if bonus_points > 0 {
            format!("{} category bonus.", category.bonus_label())
        } else {
            "No category bonus.".to_string()
        },
    };

    let verdict = tables.verdict_for(final_score);
    let verdict_info = tables.verdict_info(verdict);
    debug!(
        score = final_score,
        base_score,
        verdict = verdict.as_str(),
        "scored purchase"
    );

    Metrics {
        price,
        category,
        mode,
        original_price,
        uses_provided,
        uses,
        uses_estimated,
        cost_per_use,
        cost_per_day,
        savings,
        discount_percent,
        adjusted_price: price,
        income,
        budget_percent,
        budget,
        budget_percent_of_vibe,
        breakdown: ScoreBreakdown {
            price_threshold,
            cost_per_use: cost_per_use_factor,
            budget_impact,
            discount_sale,
            category_bonus,
        },
        base_score,
        category_bonus: bonus_points,
        score: final_score,
        verdict,
        verdict_info: verdict_info.clone(),
        stamp: verdict_info.stamp,
        confidence: final_score,
    }
}
