pub mod assessments;
pub mod health;
pub mod patients;
pub mod thresholds;
pub mod visits;
