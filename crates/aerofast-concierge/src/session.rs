//! One visitor's conversation with the concierge.
//!
//! The visitor's message is appended as soon as it is submitted. The reply
//! is computed at the same moment but held back for the configured typing
//! delay, measured from submission. Held replies drain through a single
//! worker task, so they land strictly in submission order even when an
//! earlier reply was given a longer delay than a later one.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use aerofast_core::config::ConciergeConfig;
use aerofast_core::events::SiteEvent;
use aerofast_core::pacing::{deadline_after, Pacer};
use aerofast_core::types::{ChatMessage, NavAction, Sender};
use chrono::Utc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

use crate::error::ConciergeError;
use crate::responder::ConciergeResponder;
use crate::rules::Reply;

struct PendingReply {
    ready_at: Instant,
    reply: Reply,
}

/// Everything the handle and the worker both mutate, under one lock so id
/// order matches insertion order and `close` cannot interleave with an
/// append or a pending-count update.
struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
    pending: usize,
    closed: bool,
}

impl Transcript {
    fn push(&mut self, text: String, sender: Sender, action: Option<NavAction>) -> ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            text,
            sender,
            timestamp: Utc::now(),
            action,
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }
}

/// State shared between the session handle and its reply worker.
struct Shared {
    id: Uuid,
    transcript: Mutex<Transcript>,
    events: broadcast::Sender<SiteEvent>,
}

impl Shared {
    fn lock(&self) -> std::sync::MutexGuard<'_, Transcript> {
        self.transcript.lock().expect("transcript mutex poisoned")
    }

    fn publish_appended(&self, message: &ChatMessage) {
        // No subscribers is fine: the page may not be listening.
        let _ = self.events.send(SiteEvent::MessageAppended {
            session_id: self.id,
            message: message.clone(),
        });
    }

    fn publish_typing(&self, typing: bool) {
        let _ = self.events.send(SiteEvent::TypingChanged {
            session_id: self.id,
            typing,
        });
    }
}

/// A live concierge conversation.
///
/// Must be created inside a tokio runtime: it spawns the reply worker.
/// Dropping or [closing](ChatSession::close) the session cancels every
/// reply still waiting; nothing is appended afterwards.
pub struct ChatSession {
    shared: Arc<Shared>,
    responder: Arc<ConciergeResponder>,
    queue: mpsc::UnboundedSender<PendingReply>,
    worker: JoinHandle<()>,
    reply_delay: Duration,
    max_message_length: usize,
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.shared.id)
            .field("pending", &self.shared.lock().pending)
            .field("reply_delay", &self.reply_delay)
            .field("max_message_length", &self.max_message_length)
            .finish()
    }
}

impl ChatSession {
    /// Open a session whose transcript starts with the configured greeting.
    pub fn new(
        responder: Arc<ConciergeResponder>,
        pacer: Arc<dyn Pacer>,
        config: &ConciergeConfig,
        events: broadcast::Sender<SiteEvent>,
    ) -> Self {
        let id = Uuid::new_v4();
        let mut transcript = Transcript {
            messages: Vec::new(),
            next_id: 1,
            pending: 0,
            closed: false,
        };
        transcript.push(config.greeting.clone(), Sender::Bot, None);
        let shared = Arc::new(Shared {
            id,
            transcript: Mutex::new(transcript),
            events,
        });

        let (queue, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run_reply_worker(Arc::clone(&shared), pacer, rx));

        tracing::debug!(session_id = %id, "Concierge session opened");

        Self {
            shared,
            responder,
            queue,
            worker,
            reply_delay: config.reply_delay(),
            max_message_length: config.max_message_length,
        }
    }

    pub fn id(&self) -> Uuid {
        self.shared.id
    }

    /// Snapshot of the transcript in insertion order.
    pub fn history(&self) -> Vec<ChatMessage> {
        self.shared.lock().messages.clone()
    }

    /// True while at least one reply is waiting to be appended.
    pub fn is_typing(&self) -> bool {
        self.shared.lock().pending > 0
    }

    pub fn is_closed(&self) -> bool {
        self.shared.lock().closed
    }

    /// Submit a visitor utterance with the session's reply delay.
    ///
    /// Returns the appended visitor message. Blank or over-long input is
    /// rejected and appends nothing.
    pub fn submit(&self, text: &str) -> Result<ChatMessage, ConciergeError> {
        self.submit_with_delay(text, self.reply_delay)
    }

    /// Submit the utterance behind one of the responder's quick actions.
    pub fn submit_quick_action(&self, index: usize) -> Result<ChatMessage, ConciergeError> {
        let action = self.responder.quick_action(index)?;
        self.submit(action.utterance)
    }

    /// Submit with an explicit reply delay for this one message.
    pub fn submit_with_delay(
        &self,
        text: &str,
        delay: Duration,
    ) -> Result<ChatMessage, ConciergeError> {
        if self.is_closed() {
            return Err(ConciergeError::SessionClosed);
        }
        if text.trim().is_empty() {
            return Err(ConciergeError::EmptyMessage);
        }
        if text.chars().count() > self.max_message_length {
            return Err(ConciergeError::MessageTooLong(self.max_message_length));
        }

        let ready_at = deadline_after(delay);
        let resolution = self.responder.resolve(text);

        let (message, typing_started) = {
            let mut transcript = self.shared.lock();
            if transcript.closed {
                return Err(ConciergeError::SessionClosed);
            }
            let message = transcript.push(text.to_string(), Sender::User, None);
            transcript.pending += 1;
            (message, transcript.pending == 1)
        };
        self.shared.publish_appended(&message);
        if typing_started {
            self.shared.publish_typing(true);
        }

        tracing::debug!(
            session_id = %self.shared.id,
            message_id = message.id,
            intent = resolution.intent.map(|i| i.as_str()).unwrap_or("fallback"),
            "Concierge reply queued"
        );

        let pending = PendingReply {
            ready_at,
            reply: resolution.reply,
        };
        if self.queue.send(pending).is_err() {
            let mut transcript = self.shared.lock();
            transcript.pending = transcript.pending.saturating_sub(1);
            return Err(ConciergeError::SessionClosed);
        }

        Ok(message)
    }

    /// Tear the session down, discarding pending replies.
    pub fn close(&self) {
        let discarded = {
            let mut transcript = self.shared.lock();
            if transcript.closed {
                return;
            }
            transcript.closed = true;
            std::mem::take(&mut transcript.pending)
        };
        self.worker.abort();
        tracing::debug!(
            session_id = %self.shared.id,
            discarded,
            "Concierge session closed"
        );
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.close();
    }
}

async fn run_reply_worker(
    shared: Arc<Shared>,
    pacer: Arc<dyn Pacer>,
    mut rx: mpsc::UnboundedReceiver<PendingReply>,
) {
    while let Some(pending) = rx.recv().await {
        pacer.wait_until(pending.ready_at).await;
        let (message, typing_stopped) = {
            let mut transcript = shared.lock();
            if transcript.closed {
                break;
            }
            let message = transcript.push(pending.reply.text, Sender::Bot, pending.reply.action);
            transcript.pending = transcript.pending.saturating_sub(1);
            (message, transcript.pending == 0)
        };
        shared.publish_appended(&message);
        if typing_stopped {
            shared.publish_typing(false);
        }
    }
}
