//! Unified error type for the timeline explorer.

use std::fmt;

use super::category::ErrorCategory;
use super::contract::ContractError;
use super::data::DataError;

/// Unified error type.
///
/// `TimelineError` consolidates the dataset, contract and terminal error
/// families so callers can categorize and report them uniformly.
#[derive(Debug)]
pub enum TimelineError {
    /// Dataset loading failed.
    Data(DataError),

    /// An engine contract was violated.
    Contract(ContractError),

    /// Terminal I/O failed.
    Terminal(std::io::Error),
}

impl TimelineError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            TimelineError::Data(_) => ErrorCategory::Startup,
            TimelineError::Contract(_) => ErrorCategory::Contract,
            TimelineError::Terminal(_) => ErrorCategory::System,
        }
    }

    /// Returns true if the process cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        self.category().is_fatal()
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            TimelineError::Data(err) => err.error_code(),
            TimelineError::Contract(err) => err.error_code(),
            TimelineError::Terminal(_) => "E_TERMINAL",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            TimelineError::Data(err) => format!("Could not load data: {}", err),
            TimelineError::Contract(err) => err.user_message(),
            TimelineError::Terminal(err) => format!("Terminal error: {}", err),
        }
    }

    /// Returns the contract violation, if this is one.
    pub fn as_contract(&self) -> Option<&ContractError> {
        match self {
            TimelineError::Contract(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for TimelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelineError::Data(err) => write!(f, "{}", err),
            TimelineError::Contract(err) => write!(f, "{}", err),
            TimelineError::Terminal(err) => write!(f, "Terminal error: {}", err),
        }
    }
}

impl std::error::Error for TimelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TimelineError::Data(err) => Some(err),
            TimelineError::Contract(err) => Some(err),
            TimelineError::Terminal(err) => Some(err),
        }
    }
}

impl From<DataError> for TimelineError {
    fn from(err: DataError) -> Self {
        TimelineError::Data(err)
    }
}

impl From<ContractError> for TimelineError {
    fn from(err: ContractError) -> Self {
        TimelineError::Contract(err)
    }
}

impl From<std::io::Error> for TimelineError {
    fn from(err: std::io::Error) -> Self {
        TimelineError::Terminal(err)
    }
}
