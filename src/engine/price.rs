use crate::types::metrics::FactorScore;

const MAX_POINTS: u32 = 12;

/// Price-threshold factor: tiered by absolute price.
pub fn price_threshold_score(price: f64) -> FactorScore {
    let (points, rationale) = if price < 25.0 {
        (12, "Under $25 is very reasonable.")
    } else if price < 75.0 {
        (10, "Moderate price range.")
    } else if price < 150.0 {
        (8, "Higher price, but still manageable.")
    } else if price < 300.0 {
        (6, "Premium purchase, but we'll work with it.")
    } else {
        (4, "Expensive, but not impossible to justify.")
    };
    FactorScore {
        points,
        max: MAX_POINTS,
        rationale: rationale.to_string(),
    }
}
