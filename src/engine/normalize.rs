/// Normalize a raw usage count. Anything non-finite or rounding below 1 means
/// "no usable count"; everything else is clamped to the cap. The cap bounds
/// score inflation from absurd usage claims and applies to category defaults
/// and user input alike.
pub fn normalize_uses(raw: f64, cap: u32) -> Option<u32> {
    if !raw.is_finite() {
        return None;
    }
    let rounded = raw.round();
    if rounded < 1.0 {
        return None;
    }
    Some((rounded as u32).min(cap))
}

/// Parse-or-default coercion for monetary fields: NaN, infinities, and
/// negative amounts all degrade to 0.
pub fn coerce_amount(value: Option<f64>) -> f64 {
    value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}
