use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid email: {0}")]
    InvalidEmail(String),

    #[error("invalid date: {0}")]
    InvalidDate(#[from] jiff::Error),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
