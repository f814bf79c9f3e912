use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinical measurements taken for one visit, per eye.
///
/// Zero (or absent) means "not measured" and never "clinically normal zero".
/// Values are not range-checked here; anything non-positive simply counts
/// as not measured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ClinicalMeasurementSet {
    /// Intraocular pressure, left eye (OS), in mmHg.
    pub intraocular_pressure_left: f64,
    /// Intraocular pressure, right eye (OD), in mmHg.
    pub intraocular_pressure_right: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cup_disc_ratio_left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cup_disc_ratio_right: Option<f64>,
    /// LOCS III grade, left eye. 0 = clear or not graded.
    pub lens_opacity_grade_left: i32,
    /// LOCS III grade, right eye. 0 = clear or not graded.
    pub lens_opacity_grade_right: i32,
    /// Free text carried through for audit. Never scored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ClinicalMeasurementSet {
    /// Worse-eye intraocular pressure, if either eye was measured.
    pub fn max_intraocular_pressure(&self) -> Option<f64> {
        measured(
            self.intraocular_pressure_left
                .max(self.intraocular_pressure_right),
        )
    }

    /// Worse-eye cup-disc ratio, if either eye was measured.
    pub fn max_cup_disc_ratio(&self) -> Option<f64> {
        let left = self.cup_disc_ratio_left.unwrap_or(0.0);
        let right = self.cup_disc_ratio_right.unwrap_or(0.0);
        measured(left.max(right))
    }

    /// Worse-eye lens opacity grade, if either eye was graded.
    pub fn max_lens_opacity_grade(&self) -> Option<i32> {
        let grade = self.lens_opacity_grade_left.max(self.lens_opacity_grade_right);
        (grade > 0).then_some(grade)
    }

    /// True when none of the scored quantities was measured.
    pub fn is_empty(&self) -> bool {
        self.max_intraocular_pressure().is_none()
            && self.max_cup_disc_ratio().is_none()
            && self.max_lens_opacity_grade().is_none()
    }
}

// `f64::max` ignores NaN, and NaN > 0.0 is false, so NaN reads as unmeasured.
fn measured(value: f64) -> Option<f64> {
    (value > 0.0).then_some(value)
}
