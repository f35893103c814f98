//! Error types for the concierge.

use aerofast_core::error::AerofastError;

/// Errors from the concierge.
///
/// Responding itself never fails; unmatched input gets the fallback reply.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConciergeError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("invalid rule pattern: {0}")]
    InvalidPattern(String),
    #[error("quick action not found: {0}")]
    QuickActionNotFound(usize),
    #[error("chat session is closed")]
    SessionClosed,
}

impl From<regex::Error> for ConciergeError {
    fn from(err: regex::Error) -> Self {
        ConciergeError::InvalidPattern(err.to_string())
    }
}

impl From<ConciergeError> for AerofastError {
    fn from(err: ConciergeError) -> Self {
        match err {
            ConciergeError::EmptyMessage | ConciergeError::MessageTooLong(_) => {
                AerofastError::Validation(err.to_string())
            }
            other => AerofastError::Concierge(other.to_string()),
        }
    }
}
