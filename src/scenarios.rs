use serde::Serialize;

use crate::engine::{self, normalize};
use crate::types::input::{Category, PurchaseInput};
use crate::types::tables::RuleTables;

const MAX_SCENARIOS: usize = 3;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "field", content = "value")]
pub enum ScenarioChange {
    Uses(u32),
    OriginalPrice(f64),
    Price(f64),
}

/// One perturbed re-evaluation: what the verdict becomes if a single input
/// changes.
#[derive(Debug, Clone, Serialize)]
pub struct Scenario {
    pub description: String,
    pub score: u32,
    pub stamp: String,
    pub change: ScenarioChange,
}

/// Generate up to three what-if scenarios by perturbing the input and
/// re-running the engine. Pure calling-side composition; the base input is
/// never mutated.
pub fn what_if(input: &PurchaseInput, tables: &RuleTables) -> Vec<Scenario> {
    let price = normalize::coerce_amount(input.price);
    let category = input.category.unwrap_or(Category::Other);
    let mut scenarios = Vec::new();

    // More uses: scale an explicit count by how small it is, or suggest
    // double the category default when none was given.
    let supplied = input
        .uses
        .and_then(|raw| normalize::normalize_uses(raw, tables.uses_cap));
    let new_uses = match supplied {
        Some(n) if n < 10 => n * 3,
        Some(n) if n < 50 => (f64::from(n) * 2.5).round() as u32,
        Some(n) => n * 2,
        None => tables.default_uses(category) * 2,
    };
    let mut perturbed = input.clone();
    perturbed.uses = Some(f64::from(new_uses));
    let metrics = engine::calculate_metrics(&perturbed, tables);
    scenarios.push(Scenario {
        description: format!("What if you use it {new_uses} times?"),
        score: metrics.score,
        stamp: metrics.stamp,
        change: ScenarioChange::Uses(new_uses),
    });

    // A synthetic sale, when the item is not already marked down.
    let no_sale = input.original_price.map_or(true, |op| op <= price);
    if price > 30.0 && no_sale {
        let original_price = (price * 1.5).round();
        let mut perturbed = input.clone();
        perturbed.original_price = Some(original_price);
        let metrics = engine::calculate_metrics(&perturbed, tables);
        scenarios.push(Scenario {
            description: format!("What if it was on sale from ${original_price:.0}?"),
            score: metrics.score,
            stamp: metrics.stamp,
            change: ScenarioChange::OriginalPrice(original_price),
        });
    }

    // A cheaper version, when nothing else produced a second scenario.
    if scenarios.len() < 2 && price > 50.0 {
        let reduced = (price * 0.7).round();
        let mut perturbed = input.clone();
        perturbed.price = Some(reduced);
        let metrics = engine::calculate_metrics(&perturbed, tables);
        scenarios.push(Scenario {
            description: format!("What if it cost ${reduced:.0} instead?"),
            score: metrics.score,
            stamp: metrics.stamp,
            change: ScenarioChange::Price(reduced),
        });
    }

    scenarios.truncate(MAX_SCENARIOS);
    scenarios
}
