use std::path::PathBuf;

use thiserror::Error;

use crate::findings::Quantity;

/// Errors raised while building a threshold table. Evaluation itself is
/// total and never fails.
#[derive(Debug, Error)]
pub enum RiskError {
    #[error(
        "invalid {quantity} thresholds: moderate boundary {moderate} must be finite and below high boundary {high}"
    )]
    InvalidThresholds {
        quantity: Quantity,
        moderate: f64,
        high: f64,
    },

    #[error("failed to parse threshold table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read threshold table at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
