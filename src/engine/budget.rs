use crate::types::input::IncomeBracket;
use crate::types::metrics::FactorScore;
use crate::types::tables::RuleTables;

const MAX_POINTS: u32 = 25;
// Exact midpoint of the 0-25 range: missing baseline data is neither
// penalized nor rewarded.
const NEUTRAL_POINTS: u32 = 12;

/// Budget-impact factor, scored against the caller's personal baseline. The
/// income multiplier dampens perceived impact at higher incomes.
pub fn budget_impact_score(
    price: f64,
    budget: Option<f64>,
    income: Option<IncomeBracket>,
    tables: &RuleTables,
) -> FactorScore {
    let (Some(budget), Some(income)) = (budget.filter(|b| *b > 0.0), income) else {
        return FactorScore {
            points: NEUTRAL_POINTS,
            max: MAX_POINTS,
            rationale: "Budget impact not calculated (baseline not provided).".to_string(),
        };
    };

    let adjusted_ratio = (price / budget) / tables.multiplier(income);
    let (points, rationale) = if adjusted_ratio <= 0.05 {
        (25, "Tiny impact on your monthly budget - basically free!")
    } else if adjusted_ratio <= 0.15 {
        (20, "Small impact on your monthly budget.")
    } else if adjusted_ratio <= 0.3 {
        (15, "Moderate impact on your budget.")
    } else if adjusted_ratio <= 0.6 {
        (10, "Significant chunk of your monthly budget.")
    } else if adjusted_ratio <= 1.0 {
        (5, "Almost your entire monthly budget!")
    } else {
        (0, "Exceeds your monthly discretionary budget.")
    };
    FactorScore {
        points,
        max: MAX_POINTS,
        rationale: rationale.to_string(),
    }
}
