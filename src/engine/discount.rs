use crate::types::metrics::FactorScore;

const MAX_POINTS: u32 = 15;

/// Resolve `(savings, discount_percent)`. An explicit positive discount
/// percentage takes precedence over an original-price comparison.
pub fn resolve_savings(
    price: f64,
    original_price: f64,
    discount_percent: Option<f64>,
) -> (f64, f64) {
    match discount_percent {
        Some(percent) if percent.is_finite() && percent > 0.0 => {
            (price * percent / 100.0, percent)
        }
        _ if original_price > price => {
            let savings = original_price - price;
            (savings, savings / original_price * 100.0)
        }
        _ => (0.0, 0.0),
    }
}

/// Discount/sale factor: tiered by discount percentage.
pub fn discount_sale_score(discount_percent: f64) -> FactorScore {
    let (points, rationale) = if discount_percent >= 50.0 {
        (15, "50%+ off - you're basically making money!")
    } else if discount_percent >= 30.0 {
        (12, "Great sale - 30-50% off.")
    } else if discount_percent >= 10.0 {
        (8, "Good discount - 10-30% off.")
    } else if discount_percent >= 1.0 {
        (4, "Small discount, but every bit helps.")
    } else {
        (0, "No discount, but that's okay.")
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
    fn explicit_percent_wins_over_original_price() {
        let (savings, percent) = resolve_savings(100.0, 200.0, Some(20.0));
        assert_eq!(savings, 20.0);
        assert_eq!(percent, 20.0);
    }

    #[test]
    fn original_price_derives_the_discount() {
        let (savings, percent) = resolve_savings(75.0, 100.0, None);
        assert_eq!(savings, 25.0);
        assert_eq!(percent, 25.0);
    }

    #[test]
    fn no_sale_means_zero_savings() {
        assert_eq!(resolve_savings(100.0, 0.0, None), (0.0, 0.0));
        assert_eq!(resolve_savings(100.0, 100.0, None), (0.0, 0.0));
        assert_eq!(resolve_savings(100.0, 80.0, Some(0.0)), (0.0, 0.0));
        assert_eq!(resolve_savings(100.0, 0.0, Some(f64::NAN)), (0.0, 0.0));
    }

    #[test]
    fn sale_tiers_by_percentage() {
        assert_eq!(discount_sale_score(50.0).points, 15);
        assert_eq!(discount_sale_score(49.9).points, 12);
        assert_eq!(discount_sale_score(30.0).points, 12);
        assert_eq!(discount_sale_score(29.9).points, 8);
        assert_eq!(discount_sale_score(10.0).points, 8);
        assert_eq!(discount_sale_score(9.9).points, 4);
        assert_eq!(discount_sale_score(1.0).points, 4);
        assert_eq!(discount_sale_score(0.5).points, 0);
        assert_eq!(discount_sale_score(0.0).points, 0);
    }
}
