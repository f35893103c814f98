//! Keyword response rules.
//!
//! A rule is a case-insensitive keyword alternation tested as an unanchored
//! substring match against the raw utterance, paired with a canned reply.
//! Rules are evaluated top to bottom and the first match wins, so order is
//! significant: "find a quote" is an inventory question, not an RFQ.

use std::fmt;

use aerofast_core::types::NavAction;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConciergeError;

/// What a matched rule understood the visitor to be asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    InventorySearch,
    QuoteRequest,
    Certification,
    Location,
    Contact,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::InventorySearch => "inventory_search",
            Intent::QuoteRequest => "quote_request",
            Intent::Certification => "certification",
            Intent::Location => "location",
            Intent::Contact => "contact",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A canned concierge answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<NavAction>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: None,
        }
    }

    pub fn with_action(text: impl Into<String>, label: &str, target_anchor: &str) -> Self {
        Self {
            text: text.into(),
            action: Some(NavAction::new(label, target_anchor)),
        }
    }
}

/// One `(pattern, reply)` pair.
#[derive(Debug, Clone)]
pub struct ResponseRule {
    pub intent: Intent,
    pattern: Regex,
    pub reply: Reply,
}

impl ResponseRule {
    /// Compile `keywords` (a regex alternation such as `"quote|price"`) as a
    /// case-insensitive, unanchored pattern.
    pub fn new(intent: Intent, keywords: &str, reply: Reply) -> Result<Self, ConciergeError> {
        let pattern = Regex::new(&format!("(?i){}", keywords))?;
        Ok(Self {
            intent,
            pattern,
            reply,
        })
    }

    pub fn matches(&self, utterance: &str) -> bool {
        self.pattern.is_match(utterance)
    }

    /// The pattern source, including the case-insensitivity flag.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Ordered rules plus the reply used when none match.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<ResponseRule>,
    fallback: Reply,
}

pub const FALLBACK_REPLY: &str = "I've noted that inquiry. A specialist will be better suited to assist\u{2014}would you like to open a priority ticket?";

impl RuleSet {
    pub fn new(rules: Vec<ResponseRule>, fallback: Reply) -> Self {
        Self { rules, fallback }
    }

    /// The rules the site ships with.
    pub fn standard() -> Self {
        let table: [(Intent, &str, Reply); 5] = [
            (
                Intent::InventorySearch,
                "inventory|stock|search|find",
                Reply::with_action(
                    "Our entire catalog of certified SKUs is available for real-time search. You can filter by standard (AN, MS, NAS) or category.",
                    "Open Catalog",
                    "#products",
                ),
            ),
            (
                Intent::QuoteRequest,
                "quote|price|cost|buy|rfq",
                Reply::with_action(
                    "I can direct you to our priority quote request form. Our engineering team typically reviews inquiries within 2-4 hours.",
                    "Start RFQ",
                    "#contact",
                ),
            ),
            (
                Intent::Certification,
                "cert|iso|as9100|quality",
                Reply::with_action(
                    "We maintain AS9100 Rev D and ISO 9001:2015 certifications. All hardware ships with full manufacturer traceability.",
                    "View QC",
                    "#services",
                ),
            ),
            (
                Intent::Location,
                "location|address|where",
                Reply::text(
                    "Our headquarters and primary distribution facility is located at 255 N US 287, Palestine, TX 75803.",
                ),
            ),
            (
                Intent::Contact,
                "phone|call|number",
                Reply::text(
                    "You can reach our sales desk directly at 903-723-0693 during business hours (CST).",
                ),
            ),
        ];

        let rules = table
            .into_iter()
            .map(|(intent, keywords, reply)| {
                ResponseRule::new(intent, keywords, reply).expect("Invalid concierge regex")
            })
            .collect();

        Self::new(rules, Reply::text(FALLBACK_REPLY))
    }

    /// The first rule whose pattern matches, if any.
    pub fn first_match(&self, utterance: &str) -> Option<&ResponseRule> {
        self.rules.iter().find(|rule| rule.matches(utterance))
    }

    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &Reply {
        &self.fallback
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
