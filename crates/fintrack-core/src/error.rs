use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid date: `{0}`")]
    InvalidDate(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid budget: {0}")]
    InvalidBudget(String),
    #[error("Invalid identifier: `{0}`")]
    InvalidIdentifier(String),
    #[error("Record {index} rejected: {source}")]
    RejectedRecord {
        index: usize,
        #[source]
        source: Box<CoreError>,
    },
    #[error("Validation failed: {0}")]
    Validation(String),
}
