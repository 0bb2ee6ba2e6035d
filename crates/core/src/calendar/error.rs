use thiserror::Error;

use crate::datetime::DateTimeError;

/// Errors that can occur when splitting an event into day occurrences.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EventError {
    #[error("Event begin date must be before or equal to its end date")]
    InvalidRange,
    #[error("Event dates exceed the representable date range")]
    OutOfRange,
}

impl From<DateTimeError> for EventError {
    fn from(error: DateTimeError) -> Self {
        match error {
            DateTimeError::OutOfRange => EventError::OutOfRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_error_display() {
        assert_eq!(
            EventError::InvalidRange.to_string(),
            "Event begin date must be before or equal to its end date"
        );
        assert_eq!(
            EventError::OutOfRange.to_string(),
            "Event dates exceed the representable date range"
        );
    }

    #[test]
    fn test_event_error_from_datetime_error() {
        assert_eq!(EventError::from(DateTimeError::OutOfRange), EventError::OutOfRange);
    }
}
