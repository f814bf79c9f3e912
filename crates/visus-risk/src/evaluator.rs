use std::cmp::Reverse;
use std::sync::LazyLock;

use visus_core::models::assessment::{RiskAssessment, RiskCategory};
use visus_core::models::measurement::ClinicalMeasurementSet;

use crate::findings::Finding;
use crate::thresholds::ThresholdTable;

/// Returned in place of a narrative when nothing was measured.
pub const INSUFFICIENT_DATA: &str =
    "Insufficient data to generate a full risk assessment. Please complete all clinical fields.";

const HIGH_RECOMMENDATION: &str = "Immediate clinical review is strongly recommended.";
const MODERATE_RECOMMENDATION: &str = "Close follow-up within 4 weeks advised.";
const LOW_RECOMMENDATION: &str = "Routine follow-up as scheduled.";

/// Stateless threshold evaluator. Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct RiskEvaluator {
    thresholds: ThresholdTable,
}

impl RiskEvaluator {
    /// Build an evaluator over `thresholds`. Pass a table that has been
    /// through [`ThresholdTable::validate`] to keep results monotonic.
    pub fn new(thresholds: ThresholdTable) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }

    /// Classify every measured quantity on its worse eye.
    ///
    /// High findings come first, then moderate, then normal. Within a
    /// bucket the order is IOP, cup-disc ratio, lens opacity.
    pub fn findings(&self, set: &ClinicalMeasurementSet) -> Vec<Finding> {
        let t = &self.thresholds;
        let mut findings = Vec::with_capacity(3);

        if let Some(iop) = set.max_intraocular_pressure() {
            findings.push(Finding::intraocular_pressure(iop, &t.intraocular_pressure));
        }
        if let Some(cdr) = set.max_cup_disc_ratio() {
            findings.push(Finding::cup_disc_ratio(cdr, &t.cup_disc_ratio));
        }
        if let Some(grade) = set.max_lens_opacity_grade() {
            findings.push(Finding::lens_opacity(grade, &t.lens_opacity));
        }

        findings.sort_by_key(|f| Reverse(f.severity.category()));
        findings
    }

    /// Render findings into the stored explanation text.
    pub fn render(&self, findings: &[Finding], category: RiskCategory) -> String {
        if findings.is_empty() {
            return INSUFFICIENT_DATA.to_string();
        }

        let narrative = findings
            .iter()
            .map(|f| f.message.as_str())
            .collect::<Vec<_>>()
            .join(". ");
        format!(
            "{} Assessment: {narrative}. {}",
            self.thresholds.protocol_name,
            recommendation(category)
        )
    }

    pub fn evaluate(&self, set: &ClinicalMeasurementSet) -> RiskAssessment {
        let findings = self.findings(set);
        let risk_category = categorize(&findings);
        RiskAssessment {
            risk_category,
            explanation_summary: self.render(&findings, risk_category),
        }
    }
}

/// The most severe category implied by any finding; `Low` when empty.
pub fn categorize(findings: &[Finding]) -> RiskCategory {
    findings
        .iter()
        .map(|f| f.severity.category())
        .max()
        .unwrap_or_default()
}

/// Evaluate with the default threshold table.
pub fn evaluate(set: &ClinicalMeasurementSet) -> RiskAssessment {
    static DEFAULT: LazyLock<RiskEvaluator> = LazyLock::new(RiskEvaluator::default);
    DEFAULT.evaluate(set)
}

fn recommendation(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::High => HIGH_RECOMMENDATION,
        RiskCategory::Moderate => MODERATE_RECOMMENDATION,
        RiskCategory::Low => LOW_RECOMMENDATION,
    }
}
