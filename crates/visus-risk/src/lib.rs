//! visus-risk
//!
//! Rule-based clinical risk evaluator. Pure and synchronous: no I/O, no
//! clock, no logging. Maps one visit's measurement set to a risk category
//! and a narrative explanation using a configurable threshold table.

pub mod error;
pub mod evaluator;
pub mod findings;
pub mod thresholds;

pub use evaluator::{evaluate, RiskEvaluator};
pub use findings::{Finding, Quantity, Severity};
pub use thresholds::ThresholdTable;
