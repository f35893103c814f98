//! Concierge chatbot for the Aerofast site.
//!
//! Maps one visitor utterance to one canned reply through an ordered list
//! of keyword rules, and sequences the conversation: the visitor's message
//! appears at once, the reply after a short typing pause.

pub mod error;
pub mod quick_actions;
pub mod responder;
pub mod rules;
pub mod session;

pub use error::ConciergeError;
pub use quick_actions::{QuickAction, QUICK_ACTIONS};
pub use responder::{ConciergeResponder, Resolution};
pub use rules::{Intent, Reply, ResponseRule, RuleSet};
pub use session::ChatSession;
