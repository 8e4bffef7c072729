//! Error handling for the timeline explorer.
//!
//! - **Error Categories**: startup, contract and system failures
//! - **Domain-specific Errors**: `DataError` (dataset loading) and
//!   `ContractError` (engine invariants)
//! - **Unified Error Type**: `TimelineError` consolidates all of them
//! - **Result Type Alias**: `TimelineResult<T>`
//!
//! | Category | Raised by | Fatal |
//! |----------|-----------|-------|
//! | Startup | dataset loader | Yes |
//! | Contract | selection state, view builders | No, reported at the router |
//! | System | terminal | Yes |

mod category;
mod contract;
mod data;
mod result;
mod timeline_error;

pub use category::ErrorCategory;
pub use contract::ContractError;
pub use data::DataError;
pub use result::TimelineResult;
pub use timeline_error::TimelineError;
