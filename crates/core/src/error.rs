//! Conversion error model.

use thiserror::Error;

/// Result type for fallible conversions into an [`EventId`](crate::EventId).
pub type EventIdResult<T> = Result<T, EventIdError>;

/// Error raised when a value cannot become an event identifier.
///
/// Constructing an `EventId` from an `i32` never fails. Only the checked
/// conversions from wider integer types can produce this error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EventIdError {
    /// The numeric code does not fit in a signed 32-bit id.
    #[error("event id out of range: {0}")]
    OutOfRange(i128),
}

impl EventIdError {
    pub fn out_of_range(value: impl Into<i128>) -> Self {
        Self::OutOfRange(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_includes_value() {
        let err = EventIdError::out_of_range(4_294_967_295u32);
        assert_eq!(err.to_string(), "event id out of range: 4294967295");
    }
}
