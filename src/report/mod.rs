pub mod json;
pub mod md;
pub mod text;

use crate::error::GirlMathError;
use crate::types::report::VerdictReport;
use crate::types::tables::RuleTables;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Text,
}

pub fn render(report: &VerdictReport, format: OutputFormat) -> Result<String, GirlMathError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(GirlMathError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Text => Ok(text::to_text(report)),
    }
}

pub fn render_tables(tables: &RuleTables, format: OutputFormat) -> Result<String, GirlMathError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(tables).map_err(GirlMathError::Json),
        OutputFormat::Md => Ok(md::tables_to_markdown(tables)),
        OutputFormat::Text => Ok(text::tables_to_text(tables)),
    }
}

pub(crate) fn money(value: f64) -> String {
    format!("${value:.2}")
}

pub(crate) fn opt_money(value: Option<f64>) -> String {
    value.map(money).unwrap_or_else(|| "—".to_string())
}
