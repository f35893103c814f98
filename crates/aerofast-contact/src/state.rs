//! Contact form state machine with thread-safe transitions.
//!
//! Valid transitions:
//! - Idle -> Submitting (inquiry accepted)
//! - Submitting -> Sent (simulated transmission done)
//! - Sent -> Idle (acknowledgment display elapsed)
//! - Submitting -> Idle (desk torn down mid-submission)

use std::sync::{Arc, Mutex};

use aerofast_core::types::InquiryState;

use crate::error::ContactError;

/// Returns whether `from -> to` is a permitted transition.
pub fn can_transition(from: InquiryState, to: InquiryState) -> bool {
    matches!(
        (from, to),
        (InquiryState::Idle, InquiryState::Submitting)
            | (InquiryState::Submitting, InquiryState::Sent)
            | (InquiryState::Sent, InquiryState::Idle)
            // Teardown
            | (InquiryState::Submitting, InquiryState::Idle)
    )
}

/// Shared, validated [`InquiryState`]. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct StateMachine {
    state: Arc<Mutex<InquiryState>>,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> InquiryState {
        *self.state.lock().expect("state mutex poisoned")
    }

    /// Attempt to transition to `target`, leaving the state untouched on
    /// failure.
    pub fn transition(&self, target: InquiryState) -> Result<(), ContactError> {
        let mut state = self.state.lock().expect("state mutex poisoned");
        if can_transition(*state, target) {
            tracing::debug!("Inquiry state: {} -> {}", *state, target);
            *state = target;
            Ok(())
        } else {
            Err(ContactError::InvalidTransition {
                from: *state,
                to: target,
            })
        }
    }

    /// Move Idle -> Submitting, or report why the submit control is
    /// disabled.
    pub fn begin_submission(&self) -> Result<(), ContactError> {
        let mut state = self.state.lock().expect("state mutex poisoned");
        if !state.accepts_submission() {
            return Err(ContactError::Busy(*state));
        }
        tracing::debug!("Inquiry state: {} -> {}", *state, InquiryState::Submitting);
        *state = InquiryState::Submitting;
        Ok(())
    }
}
