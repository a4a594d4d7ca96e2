use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clothes,
    Skincare,
    Travel,
    Food,
    Subscription,
    Gift,
    Jewellery,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Clothes,
        Category::Skincare,
        Category::Travel,
        Category::Food,
        Category::Subscription,
        Category::Gift,
        Category::Jewellery,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Clothes => "clothes",
            Category::Skincare => "skincare",
            Category::Travel => "travel",
            Category::Food => "food",
            Category::Subscription => "subscription",
            Category::Gift => "gift",
            Category::Jewellery => "jewellery",
            Category::Other => "other",
        }
    }

    pub fn parse(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// Label used in the category-bonus rationale line.
    pub fn bonus_label(&self) -> &'static str {
        match self {
            Category::Skincare => "Skincare/Wellness",
            Category::Clothes => "Clothing",
            Category::Travel => "Experiences/Travel",
            Category::Subscription => "Electronics / Productivity",
            Category::Jewellery => "Jewellery",
            plain => plain.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Softlife,
    Bestie,
    Mba,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum IncomeBracket {
    #[serde(rename = "under30")]
    #[value(name = "under30")]
    Under30,
    #[serde(rename = "30to60")]
    #[value(name = "30to60")]
    From30To60,
    #[serde(rename = "60to100")]
    #[value(name = "60to100")]
    From60To100,
    #[serde(rename = "100to200")]
    #[value(name = "100to200")]
    From100To200,
    #[serde(rename = "over200")]
    #[value(name = "over200")]
    Over200,
}

impl IncomeBracket {
    pub const ALL: [IncomeBracket; 5] = [
        IncomeBracket::Under30,
        IncomeBracket::From30To60,
        IncomeBracket::From60To100,
        IncomeBracket::From100To200,
        IncomeBracket::Over200,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeBracket::Under30 => "under30",
            IncomeBracket::From30To60 => "30to60",
            IncomeBracket::From60To100 => "60to100",
            IncomeBracket::From100To200 => "100to200",
            IncomeBracket::Over200 => "over200",
        }
    }

    pub fn parse(name: &str) -> Option<IncomeBracket> {
        IncomeBracket::ALL.into_iter().find(|b| b.as_str() == name)
    }
}

/// Raw, untrusted purchase description. Every field is optional; the engine
/// degrades missing or unusable values to documented defaults instead of
/// rejecting the input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PurchaseInput {
    #[serde(deserialize_with = "lenient")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub category: Option<Category>,
    #[serde(deserialize_with = "lenient")]
    pub mode: Option<Mode>,
    #[serde(deserialize_with = "lenient_count")]
    pub uses: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub original_price: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub discount_percent: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub income: Option<IncomeBracket>,
    #[serde(deserialize_with = "lenient")]
    pub budget_percent: Option<u32>,
    pub skip_vibe: bool,
}

// A malformed field in an input file means "not provided", never a hard
// failure; live-typing callers send partial input as the steady state.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

// Usage counts arrive as either a number or a numeric string.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}
