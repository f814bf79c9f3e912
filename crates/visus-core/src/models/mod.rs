pub mod assessment;
pub mod measurement;
pub mod patient;
pub mod visit;
