//! visus-core
//!
//! Pure domain types for the Visus clinic: measurement sets, risk
//! assessments, patients, and visit records. No I/O. This is the shared vocabulary
//! of the evaluator and the HTTP service.

pub mod error;
pub mod models;
