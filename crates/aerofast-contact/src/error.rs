//! Error types for the contact desk.

use aerofast_core::error::AerofastError;
use aerofast_core::types::InquiryState;
use validator::ValidationErrors;

/// Errors from submitting an inquiry.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("inquiry validation failed: {0}")]
    Validation(String),
    #[error("contact desk is busy ({0})")]
    Busy(InquiryState),
    #[error("invalid state transition: {from} -> {to}")]
    InvalidTransition { from: InquiryState, to: InquiryState },
    #[error("contact desk is closed")]
    Closed,
}

impl From<ValidationErrors> for ContactError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<ContactError> for AerofastError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::Validation(msg) => AerofastError::Validation(msg),
            other => AerofastError::Contact(other.to_string()),
        }
    }
}
