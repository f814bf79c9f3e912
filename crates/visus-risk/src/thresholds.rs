use std::path::Path;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::RiskError;
use crate::findings::{Quantity, Severity};

/// Boundaries for a continuous measure. Both comparisons are strict `>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[ts(export)]
pub struct ContinuousThresholds {
    pub moderate_above: f64,
    pub high_above: f64,
}

impl ContinuousThresholds {
    pub fn classify(&self, value: f64) -> Severity {
        if value > self.high_above {
            Severity::High
        } else if value > self.moderate_above {
            Severity::Moderate
        } else {
            Severity::Normal
        }
    }

    fn validate(&self, quantity: Quantity) -> Result<(), RiskError> {
        let ordered = self.moderate_above.is_finite()
            && self.high_above.is_finite()
            && self.moderate_above < self.high_above;
        if ordered {
            Ok(())
        } else {
            Err(RiskError::InvalidThresholds {
                quantity,
                moderate: self.moderate_above,
                high: self.high_above,
            })
        }
    }
}

/// Boundaries for a discrete grading scale. Both comparisons are `>=`,
/// since a grade is a stage rather than a continuous measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[ts(export)]
pub struct GradeThresholds {
    pub moderate_at_least: i32,
    pub high_at_least: i32,
}

impl GradeThresholds {
    pub fn classify(&self, grade: i32) -> Severity {
        if grade >= self.high_at_least {
            Severity::High
        } else if grade >= self.moderate_at_least {
            Severity::Moderate
        } else {
            Severity::Normal
        }
    }

    fn validate(&self, quantity: Quantity) -> Result<(), RiskError> {
        if self.moderate_at_least < self.high_at_least {
            Ok(())
        } else {
            Err(RiskError::InvalidThresholds {
                quantity,
                moderate: f64::from(self.moderate_at_least),
                high: f64::from(self.high_at_least),
            })
        }
    }
}

/// The full set of clinical thresholds the evaluator applies.
///
/// Defaults follow the hospital glaucoma/cataract protocol:
/// IOP > 21 / > 30 mmHg, cup-disc ratio > 0.6 / > 0.8, LOCS III grade
/// >= 2 / >= 3. Top-level entries missing from a JSON table keep these
/// defaults; an entry that is present must give both of its boundaries.
/// Unknown keys are rejected so a misspelled entry cannot fall back to a
/// default unnoticed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
#[ts(export)]
pub struct ThresholdTable {
    /// Name that prefixes every generated explanation.
    pub protocol_name: String,
    pub intraocular_pressure: ContinuousThresholds,
    pub cup_disc_ratio: ContinuousThresholds,
    pub lens_opacity: GradeThresholds,
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self {
            protocol_name: "Sankara Protocol".to_string(),
            intraocular_pressure: ContinuousThresholds {
                moderate_above: 21.0,
                high_above: 30.0,
            },
            cup_disc_ratio: ContinuousThresholds {
                moderate_above: 0.6,
                high_above: 0.8,
            },
            lens_opacity: GradeThresholds {
                moderate_at_least: 2,
                high_at_least: 3,
            },
        }
    }
}

impl ThresholdTable {
    /// Check that every moderate boundary sits strictly below its high
    /// boundary. A validated table keeps the evaluator monotonic.
    pub fn validate(&self) -> Result<(), RiskError> {
        self.intraocular_pressure
            .validate(Quantity::IntraocularPressure)?;
        self.cup_disc_ratio.validate(Quantity::CupDiscRatio)?;
        self.lens_opacity.validate(Quantity::LensOpacity)?;
        Ok(())
    }

    /// Parse and validate a JSON threshold table.
    pub fn from_json(json: &str) -> Result<Self, RiskError> {
        let table: ThresholdTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Read a JSON threshold table from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RiskError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| RiskError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }
}
