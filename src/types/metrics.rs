use serde::Serialize;

use crate::types::input::{Category, IncomeBracket, Mode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Approved,
    Justified,
    Questionable,
    Denied,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Approved => "approved",
            Verdict::Justified => "justified",
            Verdict::Questionable => "questionable",
            Verdict::Denied => "denied",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VerdictInfo {
    pub min: u32,
    pub max: u32,
    pub stamp: String,
    pub message: String,
}

/// One scored factor with its ceiling and the reason for the awarded points.
#[derive(Debug, Clone, Serialize)]
pub struct FactorScore {
    pub points: u32,
    pub max: u32,
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BonusScore {
    pub points: u32,
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub price_threshold: FactorScore,
    pub cost_per_use: FactorScore,
    pub budget_impact: FactorScore,
    pub discount_sale: FactorScore,
    pub category_bonus: BonusScore,
}

/// Everything derived from one evaluation. Constructed once, never mutated;
/// callers recompute from scratch on every input change.
#[derive(Debug, Clone, Serialize)]
pub struct Metrics {
    pub price: f64,
    pub category: Category,
    pub mode: Mode,
    pub original_price: f64,
    pub uses_provided: bool,
    pub uses: u32,
    pub uses_estimated: bool,
    pub cost_per_use: Option<f64>,
    pub cost_per_day: Option<f64>,
    pub savings: f64,
    pub discount_percent: f64,
    pub adjusted_price: f64,
    pub income: Option<IncomeBracket>,
    pub budget_percent: Option<u32>,
    pub budget: Option<f64>,
    pub budget_percent_of_vibe: Option<f64>,
    pub breakdown: ScoreBreakdown,
    pub base_score: u32,
    pub category_bonus: u32,
    pub score: u32,
    pub verdict: Verdict,
    pub verdict_info: VerdictInfo,
    pub stamp: String,
    pub confidence: u32,
}
