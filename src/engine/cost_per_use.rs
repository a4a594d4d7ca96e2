use crate::types::metrics::FactorScore;

const MAX_POINTS: u32 = 35;

/// Cost-per-use factor. Only scored when the caller supplied a usable count;
/// a purchase with no usage data cannot earn cost-efficiency points.
pub fn cost_per_use_score(cost_per_use: Option<f64>) -> FactorScore {
    let Some(value) = cost_per_use else {
        return FactorScore {
            points: 0,
            max: MAX_POINTS,
            rationale: "Cost per use cannot be calculated without usage information.".to_string(),
        };
    };

    let (points, rationale) = if value < 1.0 {
        (35, "Excellent cost-per-use - under $1 per use!")
    } else if value < 3.0 {
        (30, "Great cost-per-use ratio.")
    } else if value < 5.0 {
        (25, "Good cost-per-use ratio.")
    } else if value < 10.0 {
        (20, "Decent cost-per-use ratio.")
    } else if value < 20.0 {
        (15, "Moderate cost-per-use.")
    } else {
        (10, "Higher cost-per-use, but still some credit.")
    };
    FactorScore {
        points,
        max: MAX_POINTS,
        rationale: rationale.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_usage_scores_zero_with_explanation() {
        let factor = cost_per_use_score(None);
        assert_eq!(factor.points, 0);
        assert!(factor.rationale.contains("usage information"));
    }

    #[test]
    fn tiers_by_dollar_value() {
        assert_eq!(cost_per_use_score(Some(0.5)).points, 35);
        assert_eq!(cost_per_use_score(Some(0.99)).points, 35);
        assert_eq!(cost_per_use_score(Some(1.0)).points, 30);
        assert_eq!(cost_per_use_score(Some(2.99)).points, 30);
        assert_eq!(cost_per_use_score(Some(3.0)).points, 25);
        assert_eq!(cost_per_use_score(Some(5.0)).points, 20);
        assert_eq!(cost_per_use_score(Some(10.0)).points, 15);
        assert_eq!(cost_per_use_score(Some(20.0)).points, 10);
        assert_eq!(cost_per_use_score(Some(500.0)).points, 10);
    }
}
