//! The RFQ contact desk.
//!
//! `ContactDesk` accepts one inquiry at a time and runs the submit
//! control's timeline on a background task: a short "transmitting" pause,
//! then the acknowledgment for a fixed display period, then ready again.
//! Nothing is sent over the wire.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use aerofast_core::config::ContactConfig;
use aerofast_core::events::SiteEvent;
use aerofast_core::pacing::Pacer;
use aerofast_core::types::InquiryState;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::error::ContactError;
use crate::form::{ContactInquiry, InquiryForm};
use crate::state::StateMachine;

/// Returned when an inquiry is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryReceipt {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub state: InquiryState,
    /// Always false: the desk only simulates transmission.
    pub transmitted: bool,
}

pub struct ContactDesk {
    id: Uuid,
    state: StateMachine,
    pacer: Arc<dyn Pacer>,
    submit_delay: Duration,
    sent_display: Duration,
    events: broadcast::Sender<SiteEvent>,
    timeline: Mutex<Option<JoinHandle<()>>>,
    closed: AtomicBool,
}

impl std::fmt::Debug for ContactDesk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactDesk")
            .field("id", &self.id)
            .field("state", &self.state.current())
            .field("submit_delay", &self.submit_delay)
            .field("sent_display", &self.sent_display)
            .finish()
    }
}

impl ContactDesk {
    pub fn new(
        pacer: Arc<dyn Pacer>,
        config: &ContactConfig,
        events: broadcast::Sender<SiteEvent>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: StateMachine::new(),
            pacer,
            submit_delay: config.submit_delay(),
            sent_display: config.sent_display(),
            events,
            timeline: Mutex::new(None),
            closed: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> InquiryState {
        self.state.current()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.closed.load(Ordering::SeqCst) && self.state.current().accepts_submission()
    }

    /// Validate and accept an inquiry.
    ///
    /// Invalid input is rejected before the state is touched. While a
    /// previous inquiry is still submitting or being acknowledged the desk
    /// answers [`ContactError::Busy`]. Must be called inside a tokio
    /// runtime.
    pub fn submit(&self, form: InquiryForm) -> Result<InquiryReceipt, ContactError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(ContactError::Closed);
        }
        let inquiry = ContactInquiry::try_from(form)?;
        self.state.begin_submission()?;
        publish(&self.events, self.id, InquiryState::Submitting);

        let receipt = InquiryReceipt {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
            state: InquiryState::Submitting,
            transmitted: false,
        };

        tracing::info!(
            desk_id = %self.id,
            reference = %receipt.reference,
            company = %inquiry.company,
            message_len = inquiry.message.len(),
            "Inquiry acknowledged (not transmitted)"
        );

        let handle = tokio::spawn(run_timeline(
            self.id,
            self.state.clone(),
            Arc::clone(&self.pacer),
            self.events.clone(),
            self.submit_delay,
            self.sent_display,
        ));
        *self.timeline.lock().expect("timeline mutex poisoned") = Some(handle);

        Ok(receipt)
    }

    /// Tear the desk down: cancel any pending timeline and return to Idle.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(handle) = self.timeline.lock().expect("timeline mutex poisoned").take() {
            handle.abort();
        }
        let state = self.state.current();
        if state != InquiryState::Idle && self.state.transition(InquiryState::Idle).is_ok() {
            tracing::debug!(desk_id = %self.id, from = %state, "Contact desk torn down");
        }
    }
}

impl Drop for ContactDesk {
    fn drop(&mut self) {
        self.close();
    }
}

fn publish(events: &broadcast::Sender<SiteEvent>, desk_id: Uuid, state: InquiryState) {
    let _ = events.send(SiteEvent::InquiryStateChanged { desk_id, state });
}

async fn run_timeline(
    desk_id: Uuid,
    state: StateMachine,
    pacer: Arc<dyn Pacer>,
    events: broadcast::Sender<SiteEvent>,
    submit_delay: Duration,
    sent_display: Duration,
) {
    pacer.wait(submit_delay).await;
    if let Err(e) = state.transition(InquiryState::Sent) {
        tracing::warn!(desk_id = %desk_id, "Inquiry timeline stopped: {}", e);
        return;
    }
    publish(&events, desk_id, InquiryState::Sent);

    pacer.wait(sent_display).await;
    if let Err(e) = state.transition(InquiryState::Idle) {
        tracing::warn!(desk_id = %desk_id, "Inquiry timeline stopped: {}", e);
        return;
    }
    publish(&events, desk_id, InquiryState::Idle);
}
