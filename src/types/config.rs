use serde::Deserialize;
use std::collections::HashMap;

use crate::error::GirlMathError;
use crate::types::input::{Category, IncomeBracket};
use crate::types::tables::{
    DEFAULT_APPROVED_MIN, DEFAULT_JUSTIFIED_MIN, DEFAULT_QUESTIONABLE_MIN,
};

/// Deserialized `girlmath.toml`. Every section is optional; anything left out
/// keeps its built-in value when the rule tables are constructed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GirlMathConfig {
    pub scoring: Option<ScoringConfig>,
    pub categories: Option<CategoriesConfig>,
    pub income: Option<IncomeConfig>,
    pub verdicts: Option<VerdictsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub uses_cap: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesConfig {
    pub default_uses: Option<HashMap<String, u32>>,
    pub bonuses: Option<HashMap<String, u32>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncomeConfig {
    pub midpoints: Option<HashMap<String, f64>>,
    pub multipliers: Option<HashMap<String, f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerdictsConfig {
    pub approved_min: Option<u32>,
    pub justified_min: Option<u32>,
    pub questionable_min: Option<u32>,
}

impl GirlMathConfig {
    pub fn validate(&self) -> Result<(), GirlMathError> {
        if let Some(scoring) = &self.scoring {
            if let Some(cap) = scoring.uses_cap {
                if cap == 0 {
                    return Err(GirlMathError::ConfigParse(
                        "scoring.uses_cap must be greater than 0".to_string(),
                    ));
                }
            }
        }

        if let Some(categories) = &self.categories {
            if let Some(default_uses) = &categories.default_uses {
                validate_category_keys("categories.default_uses", default_uses.keys())?;
                for (name, uses) in default_uses {
                    if *uses == 0 {
                        return Err(GirlMathError::ConfigParse(format!(
                            "categories.default_uses.{name} must be greater than 0"
                        )));
                    }
                }
            }
            if let Some(bonuses) = &categories.bonuses {
                validate_category_keys("categories.bonuses", bonuses.keys())?;
                for (name, bonus) in bonuses {
                    if *bonus > 100 {
                        return Err(GirlMathError::ConfigParse(format!(
                            "categories.bonuses.{name} must be at most 100"
                        )));
                    }
                }
            }
        }

        if let Some(income) = &self.income {
            if let Some(midpoints) = &income.midpoints {
                validate_bracket_keys("income.midpoints", midpoints.keys())?;
                for (name, midpoint) in midpoints {
                    if !midpoint.is_finite() || *midpoint <= 0.0 {
                        return Err(GirlMathError::ConfigParse(format!(
                            "income.midpoints.{name} must be a positive amount"
                        )));
                    }
                }
            }
            if let Some(multipliers) = &income.multipliers {
                validate_bracket_keys("income.multipliers", multipliers.keys())?;
                for (name, multiplier) in multipliers {
                    if !multiplier.is_finite() || *multiplier <= 0.0 || *multiplier > 10.0 {
                        return Err(GirlMathError::ConfigParse(format!(
                            "income.multipliers.{name} must be in (0, 10]"
                        )));
                    }
                }
            }
        }

        let approved = self
            .verdicts
            .as_ref()
            .and_then(|v| v.approved_min)
            .unwrap_or(DEFAULT_APPROVED_MIN);
        let justified = self
            .verdicts
            .as_ref()
            .and_then(|v| v.justified_min)
            .unwrap_or(DEFAULT_JUSTIFIED_MIN);
        let questionable = self
            .verdicts
            .as_ref()
            .and_then(|v| v.questionable_min)
            .unwrap_or(DEFAULT_QUESTIONABLE_MIN);
        if !(0 < questionable && questionable < justified && justified < approved && approved <= 100)
        {
            return Err(GirlMathError::ConfigParse(format!(
                "verdict tier minimums must satisfy 0 < questionable ({questionable}) < justified ({justified}) < approved ({approved}) <= 100"
            )));
        }

        Ok(())
    }
}

fn validate_category_keys<'a>(
    section: &str,
    keys: impl Iterator<Item = &'a String>,
) -> Result<(), GirlMathError> {
    for key in keys {
        if Category::parse(key).is_none() {
            return Err(GirlMathError::ConfigParse(format!(
                "{section} contains unknown category: {key}"
            )));
        }
    }
    Ok(())
}

fn validate_bracket_keys<'a>(
    section: &str,
    keys: impl Iterator<Item = &'a String>,
) -> Result<(), GirlMathError> {
    for key in keys {
        if IncomeBracket::parse(key).is_none() {
            return Err(GirlMathError::ConfigParse(format!(
                "{section} contains unknown income bracket: {key}"
            )));
        }
    }
    Ok(())
}
