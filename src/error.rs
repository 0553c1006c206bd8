//! Error type shared by every fallible filter entry point.
//!
//! Filters never fail on pixel data: channel values are clamped by
//! construction. The only failures are caller errors (a parameter outside
//! its valid domain) and buffers whose size does not match the declared
//! geometry.
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum FilterError {
    /// A filter parameter lies outside the domain the operation accepts.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
    /// A pixel buffer does not match the geometry it was paired with.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },
}

impl FilterError {
    pub(crate) fn invalid(name: &'static str, value: impl ToString, reason: &'static str) -> Self {
        FilterError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }

    pub(crate) fn mismatch(expected: impl ToString, actual: impl ToString) -> Self {
        FilterError::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

pub type FilterResult<T> = Result<T, FilterError>;
