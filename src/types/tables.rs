use serde::Serialize;
use std::collections::BTreeMap;

use crate::types::config::GirlMathConfig;
use crate::types::input::{Category, IncomeBracket};
use crate::types::metrics::{Verdict, VerdictInfo};

pub const DEFAULT_USES_CAP: u32 = 120;
pub const DEFAULT_APPROVED_MIN: u32 = 70;
pub const DEFAULT_JUSTIFIED_MIN: u32 = 50;
pub const DEFAULT_QUESTIONABLE_MIN: u32 = 30;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TierBounds {
    pub approved_min: u32,
    pub justified_min: u32,
    pub questionable_min: u32,
}

impl Default for TierBounds {
    fn default() -> Self {
        Self {
            approved_min: DEFAULT_APPROVED_MIN,
            justified_min: DEFAULT_JUSTIFIED_MIN,
            questionable_min: DEFAULT_QUESTIONABLE_MIN,
        }
    }
}

/// Immutable rule tables consumed by the engine. Built once at startup, from
/// the built-in values plus any `girlmath.toml` overrides, and passed by
/// reference into every evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct RuleTables {
    pub uses_cap: u32,
    default_uses: BTreeMap<Category, u32>,
    bonuses: BTreeMap<Category, u32>,
    midpoints: BTreeMap<IncomeBracket, f64>,
    multipliers: BTreeMap<IncomeBracket, f64>,
    pub tiers: TierBounds,
}

impl Default for RuleTables {
    fn default() -> Self {
        let default_uses = BTreeMap::from([
            (Category::Skincare, 180),
            (Category::Clothes, 30),
            (Category::Travel, 1),
            (Category::Food, 1),
            (Category::Subscription, 30),
            (Category::Gift, 1),
            (Category::Jewellery, 60),
            (Category::Other, 1),
        ]);
        let bonuses = BTreeMap::from([
            (Category::Skincare, 15),
            (Category::Clothes, 12),
            (Category::Travel, 10),
            (Category::Subscription, 8),
            (Category::Jewellery, 8),
            (Category::Food, 0),
            (Category::Gift, 0),
            (Category::Other, 0),
        ]);
        let midpoints = BTreeMap::from([
            (IncomeBracket::Under30, 2000.0),
            (IncomeBracket::From30To60, 3750.0),
            (IncomeBracket::From60To100, 6500.0),
            (IncomeBracket::From100To200, 12500.0),
            (IncomeBracket::Over200, 20000.0),
        ]);
        let multipliers = BTreeMap::from([
            (IncomeBracket::Under30, 0.8),
            (IncomeBracket::From30To60, 1.0),
            (IncomeBracket::From60To100, 1.2),
            (IncomeBracket::From100To200, 1.5),
            (IncomeBracket::Over200, 2.0),
        ]);

        Self {
            uses_cap: DEFAULT_USES_CAP,
            default_uses,
            bonuses,
            midpoints,
            multipliers,
            tiers: TierBounds::default(),
        }
    }
}

impl RuleTables {
    pub fn from_config(config: Option<&GirlMathConfig>) -> Self {
        let mut tables = Self::default();
        let Some(config) = config else {
            return tables;
        };

        if let Some(cap) = config.scoring.as_ref().and_then(|s| s.uses_cap) {
            tables.uses_cap = cap;
        }
        if let Some(categories) = &config.categories {
            if let Some(overrides) = &categories.default_uses {
                for (name, uses) in overrides {
                    if let Some(category) = Category::parse(name) {
                        tables.default_uses.insert(category, *uses);
                    }
                }
            }
            if let Some(overrides) = &categories.bonuses {
                for (name, bonus) in overrides {
                    if let Some(category) = Category::parse(name) {
                        tables.bonuses.insert(category, *bonus);
                    }
                }
            }
        }
        if let Some(income) = &config.income {
            if let Some(overrides) = &income.midpoints {
                for (name, midpoint) in overrides {
                    if let Some(bracket) = IncomeBracket::parse(name) {
                        tables.midpoints.insert(bracket, *midpoint);
                    }
                }
            }
            if let Some(overrides) = &income.multipliers {
                for (name, multiplier) in overrides {
                    if let Some(bracket) = IncomeBracket::parse(name) {
                        tables.multipliers.insert(bracket, *multiplier);
                    }
                }
            }
        }
        if let Some(verdicts) = &config.verdicts {
            if let Some(min) = verdicts.approved_min {
                tables.tiers.approved_min = min;
            }
            if let Some(min) = verdicts.justified_min {
                tables.tiers.justified_min = min;
            }
            if let Some(min) = verdicts.questionable_min {
                tables.tiers.questionable_min = min;
            }
        }

        tables
    }

    pub fn default_uses(&self, category: Category) -> u32 {
        self.default_uses.get(&category).copied().unwrap_or(1)
    }

    pub fn bonus(&self, category: Category) -> u32 {
        self.bonuses.get(&category).copied().unwrap_or(0)
    }

    pub fn midpoint(&self, bracket: IncomeBracket) -> f64 {
        self.midpoints.get(&bracket).copied().unwrap_or(3750.0)
    }

    pub fn multiplier(&self, bracket: IncomeBracket) -> f64 {
        self.multipliers.get(&bracket).copied().unwrap_or(1.0)
    }

    /// Tier index by score: 3 approved, 2 justified, 1 questionable, 0 denied.
    pub fn tier_index(&self, score: u32) -> u8 {
        if score >= self.tiers.approved_min {
            3
        } else if score >= self.tiers.justified_min {
            2
        } else if score >= self.tiers.questionable_min {
            1
        } else {
            0
        }
    }

    /// Top of the tier exactly one above `base_tier`; the ceiling a category
    /// bonus may reach.
    pub fn tier_cap(&self, base_tier: u8) -> u32 {
        match base_tier {
            0 => self.tiers.justified_min - 1,
            1 => self.tiers.approved_min - 1,
            _ => 100,
        }
    }

    pub fn verdict_for(&self, score: u32) -> Verdict {
        match self.tier_index(score) {
            3 => Verdict::Approved,
            2 => Verdict::Justified,
            1 => Verdict::Questionable,
            _ => Verdict::Denied,
        }
    }

    pub fn verdict_info(&self, verdict: Verdict) -> VerdictInfo {
        let (min, max, stamp, message) = match verdict {
            Verdict::Approved => (
                self.tiers.approved_min,
                100,
                "APPROVED ✨",
                "Basically free! This is certified Girl Math.",
            ),
            Verdict::Justified => (
                self.tiers.justified_min,
                self.tiers.approved_min - 1,
                "JUSTIFIED 👍",
                "The math is mathing. We'll allow it.",
            ),
            Verdict::Questionable => (
                self.tiers.questionable_min,
                self.tiers.justified_min - 1,
                "QUESTIONABLE 🤔",
                "Questionable, but we see the vision.",
            ),
            Verdict::Denied => (
                0,
                self.tiers.questionable_min - 1,
                "DENIED 🚫",
                "Let's sleep on it",
            ),
        };
        VerdictInfo {
            min,
            max,
            stamp: stamp.to_string(),
            message: message.to_string(),
        }
    }

    pub fn vibe_label(&self, budget_percent: u32) -> Option<&'static str> {
        match budget_percent {
            5 => Some("Very disciplined"),
            10 => Some("Balanced"),
            15 => Some("Soft life"),
            20 => Some("Main character"),
            25 => Some("Lavish"),
            _ => None,
        }
    }
}
