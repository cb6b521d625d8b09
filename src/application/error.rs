use thiserror::Error;

use crate::domain::RejectionReason;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Operation rejected: {0}")]
    Rejected(#[from] RejectionReason),

    #[error("Unknown category: {0} (expected one of Salary, Food, Transport)")]
    UnknownCategory(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
