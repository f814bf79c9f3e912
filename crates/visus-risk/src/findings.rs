use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use visus_core::models::assessment::RiskCategory;

use crate::thresholds::{ContinuousThresholds, GradeThresholds};

/// A scored clinical quantity. Each contributes at most one finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Quantity {
    IntraocularPressure,
    CupDiscRatio,
    LensOpacity,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Quantity::IntraocularPressure => "intraocular pressure",
            Quantity::CupDiscRatio => "cup-disc ratio",
            Quantity::LensOpacity => "lens opacity",
        })
    }
}

/// Bucket a finding falls into after comparison with its thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    High,
    Moderate,
    Normal,
}

impl Severity {
    /// The overall category a finding of this severity implies on its own.
    pub fn category(self) -> RiskCategory {
        match self {
            Severity::High => RiskCategory::High,
            Severity::Moderate => RiskCategory::Moderate,
            Severity::Normal => RiskCategory::Low,
        }
    }
}

/// One classified measurement with its rendered description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Finding {
    pub quantity: Quantity,
    pub severity: Severity,
    /// Worse-eye value that was classified.
    pub value: f64,
    pub message: String,
}

impl Finding {
    pub(crate) fn intraocular_pressure(value: f64, thresholds: &ContinuousThresholds) -> Self {
        let severity = thresholds.classify(value);
        let message = match severity {
            Severity::High => {
                format!("Critical IOP ({value} mmHg) — Urgent glaucoma referral required")
            }
            Severity::Moderate => format!(
                "Elevated IOP ({value} mmHg) — Above the {} mmHg glaucoma threshold",
                thresholds.moderate_above
            ),
            Severity::Normal => format!("IOP within normal range ({value} mmHg)"),
        };
        Self {
            quantity: Quantity::IntraocularPressure,
            severity,
            value,
            message,
        }
    }

    pub(crate) fn cup_disc_ratio(value: f64, thresholds: &ContinuousThresholds) -> Self {
        let severity = thresholds.classify(value);
        let message = match severity {
            Severity::High => {
                format!("Critical Cup-Disc Ratio ({value}) — High glaucoma progression risk")
            }
            Severity::Moderate => format!(
                "Suspicious Cup-Disc Ratio ({value}) — Above {} glaucoma threshold",
                thresholds.moderate_above
            ),
            Severity::Normal => format!("Cup-Disc Ratio within normal limits ({value})"),
        };
        Self {
            quantity: Quantity::CupDiscRatio,
            severity,
            value,
            message,
        }
    }

    pub(crate) fn lens_opacity(grade: i32, thresholds: &GradeThresholds) -> Self {
        let severity = thresholds.classify(grade);
        let message = match severity {
            Severity::High => format!(
                "Significant lens opacity (LOCS III Grade {grade}) — Surgical review indicated"
            ),
            Severity::Moderate => format!("Mild lens opacity present (LOCS III Grade {grade})"),
            Severity::Normal => format!("Lens clarity acceptable (Grade {grade})"),
        };
        Self {
            quantity: Quantity::LensOpacity,
            severity,
            value: f64::from(grade),
            message,
        }
    }
}
