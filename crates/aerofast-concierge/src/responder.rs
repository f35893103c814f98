//! Stateless utterance → reply mapping.

use serde::Serialize;

use crate::error::ConciergeError;
use crate::quick_actions::{QuickAction, QUICK_ACTIONS};
use crate::rules::{Intent, Reply, RuleSet};

/// The reply chosen for an utterance and the intent that chose it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// `None` when the fallback was used.
    pub intent: Option<Intent>,
    pub reply: Reply,
}

/// Rule-based concierge. Holds no conversation state; see
/// [`ChatSession`](crate::session::ChatSession) for sequencing.
#[derive(Debug, Clone, Default)]
pub struct ConciergeResponder {
    rules: RuleSet,
}

impl ConciergeResponder {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn standard() -> Self {
        Self::new(RuleSet::standard())
    }

    /// Reply to `utterance`. Total: any input, including the empty string,
    /// yields a reply.
    pub fn respond(&self, utterance: &str) -> Reply {
        self.resolve(utterance).reply
    }

    /// Like [`ConciergeResponder::respond`], also reporting the matched intent.
    pub fn resolve(&self, utterance: &str) -> Resolution {
        match self.rules.first_match(utterance) {
            Some(rule) => {
                tracing::debug!(intent = %rule.intent, "Concierge rule matched");
                Resolution {
                    intent: Some(rule.intent),
                    reply: rule.reply.clone(),
                }
            }
            None => {
                tracing::debug!("No concierge rule matched; using fallback");
                Resolution {
                    intent: None,
                    reply: self.rules.fallback().clone(),
                }
            }
        }
    }

    pub fn quick_actions(&self) -> &'static [QuickAction] {
        &QUICK_ACTIONS
    }

    pub fn quick_action(&self, index: usize) -> Result<&'static QuickAction, ConciergeError> {
        QUICK_ACTIONS
            .get(index)
            .ok_or(ConciergeError::QuickActionNotFound(index))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}
