use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Overall risk label for a visit. Ordinal: `Low < Moderate < High`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum RiskCategory {
    #[default]
    Low,
    Moderate,
    High,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low",
            RiskCategory::Moderate => "Moderate",
            RiskCategory::High => "High",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of running the risk evaluator over one measurement set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskAssessment {
    pub risk_category: RiskCategory,
    pub explanation_summary: String,
}
