use serde::Serialize;

/// A one-click shortcut that submits a canned utterance on the visitor's
/// behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub utterance: &'static str,
}

/// Shown under the conversation, in display order.
pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "Request Quote",
        utterance: "I would like to request a formal quote.",
    },
    QuickAction {
        label: "Search Inventory",
        utterance: "How do I search your inventory?",
    },
    QuickAction {
        label: "View Certifications",
        utterance: "What certifications do you hold?",
    },
    // No rule covers order status; this one reaches the fallback.
    QuickAction {
        label: "Track Order",
        utterance: "I need to check order status.",
    },
];
