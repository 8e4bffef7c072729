//! Result type alias for timeline operations.

use super::timeline_error::TimelineError;

/// Type alias for Results using TimelineError.
///
/// # Example
///
/// ```ignore
/// use covid_timeline::error::TimelineResult;
///
/// fn refresh(router: &mut EventRouter) -> TimelineResult<()> {
///     router.handle(UiEvent::DateChanged(3))?;
///     Ok(())
/// }
/// ```
pub type TimelineResult<T> = Result<T, TimelineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContractError;

    #[test]
    fn test_question_mark_converts_contract_errors() {
        fn fails() -> TimelineResult<()> {
            Err(ContractError::DateOutOfRange { index: -1 })?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert_eq!(
            err.as_contract(),
            Some(&ContractError::DateOutOfRange { index: -1 })
        );
    }
}
