use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{ChatMessage, InquiryState};

/// Events published while a visitor interacts with the site.
///
/// Emitted by chat sessions and contact desks after a state change and
/// consumed by the per-visit SSE stream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum SiteEvent {
    /// A message was appended to a concierge conversation.
    MessageAppended {
        session_id: Uuid,
        message: ChatMessage,
    },

    /// The concierge typing indicator switched on or off.
    TypingChanged { session_id: Uuid, typing: bool },

    /// The contact form moved to a new state.
    InquiryStateChanged { desk_id: Uuid, state: InquiryState },
}

impl SiteEvent {
    /// SSE event name for this event.
    pub fn event_name(&self) -> &'static str {
        match self {
            SiteEvent::MessageAppended { .. } => "message",
            SiteEvent::TypingChanged { .. } => "typing",
            SiteEvent::InquiryStateChanged { .. } => "inquiry",
        }
    }
}
