//! Error type shared by the loaders, validation and report writers
//!
//! The calculator itself is total and never returns an error; everything
//! here belongs to the layers around it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    #[error("unknown risk profile: {0}")]
    UnknownRiskProfile(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlannerError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        PlannerError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = PlannerError::invalid("lump_sum", "must be >= 0, got -1");
        assert_eq!(
            err.to_string(),
            "invalid parameter `lump_sum`: must be >= 0, got -1"
        );
    }
}
