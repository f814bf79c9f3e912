use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::assessment::{RiskAssessment, RiskCategory};
use super::measurement::ClinicalMeasurementSet;
use crate::error::CoreError;

/// A recorded clinical visit with the risk assessment stored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClinicalVisit {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub visual_acuity_right: Option<String>,
    pub visual_acuity_left: Option<String>,
    #[serde(flatten)]
    pub measurements: ClinicalMeasurementSet,
    pub risk_category: RiskCategory,
    pub risk_explanation_summary: String,
    pub created_at: jiff::Timestamp,
    /// When the stored assessment was last computed.
    pub assessed_at: jiff::Timestamp,
}

impl ClinicalVisit {
    /// Replace the stored assessment after an explicit re-run.
    pub fn apply_assessment(&mut self, assessment: RiskAssessment, now: jiff::Timestamp) {
        self.risk_category = assessment.risk_category;
        self.risk_explanation_summary = assessment.explanation_summary;
        self.assessed_at = now;
    }
}

/// A form field that may arrive as a JSON number or as the raw input string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FormValue {
    Number(f64),
    Text(String),
}

impl FormValue {
    /// Finite real value read from the leading number of the input, so
    /// `"22 mmHg"` reads as 22. `None` if the input does not start with one.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            FormValue::Number(n) => *n,
            FormValue::Text(s) => leading_decimal(s)?.parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Integer grade read from the leading digits of the input, so `"3+"`
    /// reads as 3. Numeric input is truncated toward zero.
    pub fn as_grade(&self) -> Option<i32> {
        match self {
            FormValue::Number(n) => n.is_finite().then(|| n.trunc() as i32),
            FormValue::Text(s) => leading_integer(s)?.parse::<i32>().ok(),
        }
    }
}

/// Longest prefix of `s` (after leading whitespace) shaped like
/// `[+-]digits[.digits][e[+-]digits]`, with at least one mantissa digit.
fn leading_decimal(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = sign_len(bytes);

    let int_digits = digit_run(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_start = end + 1;
        let exp_sign = sign_len(&bytes[exp_start..]);
        let exp_digits = digit_run(&bytes[exp_start + exp_sign..]);
        if exp_digits > 0 {
            end = exp_start + exp_sign + exp_digits;
        }
    }
    Some(&s[..end])
}

/// Longest prefix of `s` (after leading whitespace) shaped like
/// `[+-]digits`.
fn leading_integer(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let sign = sign_len(bytes);
    let digits = digit_run(&bytes[sign..]);
    (digits > 0).then(|| &s[..sign + digits])
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Visit-creation payload as submitted by the visit-entry form.
///
/// OD is the right eye, OS the left.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VisitForm {
    #[serde(rename = "patientId", default)]
    pub patient_id: String,
    #[serde(rename = "vaOD", default)]
    pub va_od: Option<String>,
    #[serde(rename = "vaOS", default)]
    pub va_os: Option<String>,
    #[serde(rename = "iopOD", default)]
    pub iop_od: Option<FormValue>,
    #[serde(rename = "iopOS", default)]
    pub iop_os: Option<FormValue>,
    #[serde(rename = "cdrOD", default)]
    pub cdr_od: Option<FormValue>,
    #[serde(rename = "cdrOS", default)]
    pub cdr_os: Option<FormValue>,
    #[serde(rename = "lensOD", default)]
    pub lens_od: Option<FormValue>,
    #[serde(rename = "lensOS", default)]
    pub lens_os: Option<FormValue>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl VisitForm {
    /// Build the measurement set. Unparsable pressures and grades become 0,
    /// an unparsable or zero cup-disc ratio becomes absent.
    pub fn measurements(&self) -> ClinicalMeasurementSet {
        ClinicalMeasurementSet {
            intraocular_pressure_left: pressure(&self.iop_os),
            intraocular_pressure_right: pressure(&self.iop_od),
            cup_disc_ratio_left: ratio(&self.cdr_os),
            cup_disc_ratio_right: ratio(&self.cdr_od),
            lens_opacity_grade_left: grade(&self.lens_os),
            lens_opacity_grade_right: grade(&self.lens_od),
            notes: self.notes.clone().filter(|n| !n.trim().is_empty()),
        }
    }

    /// Turn the form into a visit record carrying `assessment`.
    pub fn into_visit(
        self,
        id: Uuid,
        assessment: RiskAssessment,
        now: jiff::Timestamp,
    ) -> Result<ClinicalVisit, CoreError> {
        let patient_id = self.patient_id.trim();
        if patient_id.is_empty() {
            return Err(CoreError::MissingField("patientId".to_string()));
        }
        let patient_id = Uuid::parse_str(patient_id)?;
        let measurements = self.measurements();

        Ok(ClinicalVisit {
            id,
            patient_id,
            visual_acuity_right: self.va_od.filter(|va| !va.trim().is_empty()),
            visual_acuity_left: self.va_os.filter(|va| !va.trim().is_empty()),
            measurements,
            risk_category: assessment.risk_category,
            risk_explanation_summary: assessment.explanation_summary,
            created_at: now,
            assessed_at: now,
        })
    }
}

fn pressure(field: &Option<FormValue>) -> f64 {
    field.as_ref().and_then(FormValue::as_f64).unwrap_or(0.0)
}

fn ratio(field: &Option<FormValue>) -> Option<f64> {
    field
        .as_ref()
        .and_then(FormValue::as_f64)
        .filter(|v| *v != 0.0)
}

fn grade(field: &Option<FormValue>) -> i32 {
    field.as_ref().and_then(FormValue::as_grade).unwrap_or(0)
}
