//! Error types for budget analysis.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::UndefinedReason;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid input: {field} must be non-negative (got {value})")]
    InvalidInput { field: &'static str, value: Decimal },

    #[error("Cannot compute health score: {0}")]
    UndefinedScore(UndefinedReason),

    #[error("Division undefined in {operation}")]
    DivisionUndefined { operation: &'static str },
}

pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;
