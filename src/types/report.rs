use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::scenarios::Scenario;
use crate::types::metrics::Metrics;

/// Render-facing envelope around one evaluation. The timestamp is stamped at
/// the CLI boundary so the engine itself stays pure.
#[derive(Debug, Clone, Serialize)]
pub struct VerdictReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluated_at: Option<DateTime<Utc>>,
    pub metrics: Metrics,
    pub justification: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scenarios: Vec<Scenario>,
}
