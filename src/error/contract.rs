//! Engine contract violations.
//!
//! These errors mean the selection engine was handed a value its invariants
//! rule out. They are never defaulted away; they propagate to the event
//! router, which logs them and hands them to the presenter.

use std::fmt;

/// Contract violation raised by the selection engine or a view builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// A date index outside `[0, 47]`.
    DateOutOfRange { index: i64 },

    /// A selected ISO code has no entry in the country lookup.
    UnknownCountry { iso_code: String },

    /// A metric name outside the three supported metrics.
    UnknownMetric { value: String },
}

impl ContractError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ContractError::DateOutOfRange { .. } => "E_RANGE_DATE",
            ContractError::UnknownCountry { .. } => "E_LOOKUP_COUNTRY",
            ContractError::UnknownMetric { .. } => "E_METRIC",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ContractError::DateOutOfRange { index } => {
                format!("Date position {} is outside the timeline.", index)
            }
            ContractError::UnknownCountry { iso_code } => {
                format!("No country name is known for '{}'. The dataset is inconsistent.", iso_code)
            }
            ContractError::UnknownMetric { value } => {
                format!(
                    "'{}' is not a metric. Choose Infections, Deaths or Vaccinations.",
                    value
                )
            }
        }
    }
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractError::DateOutOfRange { index } => {
                write!(f, "Range error: date index {} is outside [0, 47]", index)
            }
            ContractError::UnknownCountry { iso_code } => {
                write!(f, "Country lookup has no entry for '{}'", iso_code)
            }
            ContractError::UnknownMetric { value } => {
                write!(f, "Unknown metric '{}'", value)
            }
        }
    }
}

impl std::error::Error for ContractError {}
