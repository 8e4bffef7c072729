//! Error category classification.
//!
//! Categories decide how an error is surfaced: startup errors abort the
//! process, contract violations are reported at the event boundary, and
//! system errors come from the terminal or the filesystem.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The dataset could not be loaded. The process must not start.
    Startup,

    /// An engine invariant was broken (out-of-range date index, unknown
    /// country code). Indicates a bug or a data inconsistency.
    Contract,

    /// Terminal or OS errors raised by the presentation layer.
    System,
}

impl ErrorCategory {
    /// Returns true if errors in this category must terminate the process.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorCategory::Startup | ErrorCategory::System)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Startup => "startup",
            ErrorCategory::Contract => "contract",
            ErrorCategory::System => "system",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Startup => "Dataset could not be loaded",
            ErrorCategory::Contract => "Internal consistency error",
            ErrorCategory::System => "System error",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Startup => {
                "Check that the dataset directory exists and contains the processed CSV files"
            }
            ErrorCategory::Contract => "This is a bug. Please report it with the log file",
            ErrorCategory::System => "Check your terminal and try again",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_fatal() {
        assert!(ErrorCategory::Startup.is_fatal());
        assert!(ErrorCategory::System.is_fatal());
        assert!(!ErrorCategory::Contract.is_fatal());
    }

    #[test]
    fn test_category_as_str() {
        assert_eq!(ErrorCategory::Startup.as_str(), "startup");
        assert_eq!(ErrorCategory::Contract.as_str(), "contract");
        assert_eq!(ErrorCategory::System.as_str(), "system");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ErrorCategory::Contract), "contract");
    }

    #[test]
    fn test_category_recovery_hint() {
        assert!(ErrorCategory::Startup.recovery_hint().contains("dataset"));
        assert!(ErrorCategory::Contract.recovery_hint().contains("bug"));
    }
}
