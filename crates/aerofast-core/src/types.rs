use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AerofastError;

// =============================================================================
// Catalog
// =============================================================================

/// Inventory depth of a product category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    High,
    Medium,
    Low,
}

impl StockLevel {
    /// Short label shown in the catalog manifest. Sorting by stock level
    /// compares these labels, not the enum order.
    pub fn label(&self) -> &'static str {
        match self {
            StockLevel::High => "High",
            StockLevel::Medium => "Med",
            StockLevel::Low => "Low",
        }
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured detail shown in the category detail view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSpecs {
    /// Types and configurations, in display order.
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_numbers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standards: Option<Vec<String>>,
}

/// One record of the hardware catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategory {
    /// Unique slug, e.g. `"bolts"`.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Applicable standards label, e.g. `"AN / MS / NAS"`.
    pub standard: String,
    /// Short category tag, only used for search matching.
    pub summary: String,
    pub stock_level: StockLevel,
    pub specs: ProductSpecs,
}

impl ProductCategory {
    /// The individual standards named in the `standard` label.
    pub fn standards(&self) -> Vec<&str> {
        self.standard
            .split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// The value compared when sorting by `field`.
    pub fn sort_key(&self, field: SortField) -> &str {
        match field {
            SortField::Id => &self.id,
            SortField::Name => &self.name,
            SortField::Description => &self.description,
            SortField::Standard => &self.standard,
            SortField::StockLevel => self.stock_level.label(),
        }
    }
}

/// Column the catalog can be ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Id,
    Name,
    Description,
    Standard,
    StockLevel,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Id,
        SortField::Name,
        SortField::Description,
        SortField::Standard,
        SortField::StockLevel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Description => "description",
            SortField::Standard => "standard",
            SortField::StockLevel => "stock_level",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = AerofastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                AerofastError::Validation(format!(
                    "Invalid sort field '{}'. Must be one of: id, name, description, standard, stock_level",
                    s
                ))
            })
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = AerofastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(AerofastError::Validation(format!(
                "Invalid sort direction '{}'. Must be one of: asc, desc",
                other
            ))),
        }
    }
}

// =============================================================================
// Concierge
// =============================================================================

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Bot,
    User,
}

/// A suggested on-page shortcut attached to a bot reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavAction {
    pub label: String,
    /// Anchor id including the leading `#`, e.g. `"#products"`.
    pub target_anchor: String,
}

impl NavAction {
    pub fn new(label: impl Into<String>, target_anchor: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target_anchor: target_anchor.into(),
        }
    }
}

/// One entry of a concierge conversation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Monotonic per-session ordering key.
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<NavAction>,
}

// =============================================================================
// Contact
// =============================================================================

/// Lifecycle of the contact form's submit control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryState {
    /// Ready to accept a submission.
    #[default]
    Idle,
    /// Simulated transmission in progress.
    Submitting,
    /// Acknowledgment displayed; resets to idle after a fixed duration.
    Sent,
}

impl InquiryState {
    /// Whether the submit control is enabled in this state.
    pub fn accepts_submission(&self) -> bool {
        matches!(self, InquiryState::Idle)
    }
}

impl fmt::Display for InquiryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InquiryState::Idle => write!(f, "Idle"),
            InquiryState::Submitting => write!(f, "Submitting"),
            InquiryState::Sent => write!(f, "Sent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pins() -> ProductCategory {
        ProductCategory {
            id: "pins".to_string(),
            name: "Pins".to_string(),
            description: "Cotter, dowel, hitch, and spring pins.".to_string(),
            standard: "MS / NAS / AN".to_string(),
            summary: "Assembly retention".to_string(),
            stock_level: StockLevel::Medium,
            specs: ProductSpecs {
                types: vec!["Cotter Pins".to_string()],
                standards: Some(vec!["AN".to_string(), "MS".to_string()]),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_stock_level_labels() {
        assert_eq!(StockLevel::High.label(), "High");
        assert_eq!(StockLevel::Medium.label(), "Med");
        assert_eq!(StockLevel::Low.to_string(), "Low");
    }

    #[test]
    fn test_standards_split_and_trimmed() {
        assert_eq!(pins().standards(), vec!["MS", "NAS", "AN"]);
    }

    #[test]
    fn test_standards_single_label() {
        let mut item = pins();
        item.standard = "Custom".to_string();
        assert_eq!(item.standards(), vec!["Custom"]);
    }

    #[test]
    fn test_sort_key_per_field() {
        let item = pins();
        assert_eq!(item.sort_key(SortField::Id), "pins");
        assert_eq!(item.sort_key(SortField::Name), "Pins");
        assert_eq!(item.sort_key(SortField::Standard), "MS / NAS / AN");
        assert_eq!(item.sort_key(SortField::StockLevel), "Med");
    }

    #[test]
    fn test_sort_field_parse() {
        for field in SortField::ALL {
            assert_eq!(field.as_str().parse::<SortField>().unwrap(), field);
        }
        let err = "price".parse::<SortField>().unwrap_err();
        assert!(matches!(err, AerofastError::Validation(_)));
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn test_sort_direction_parse_and_flip() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("up".parse::<SortDirection>().is_err());
        assert_eq!(SortDirection::Asc.flipped(), SortDirection::Desc);
        assert_eq!(SortDirection::Asc.flipped().flipped(), SortDirection::Asc);
    }

    #[test]
    fn test_product_serialization_omits_missing_specs() {
        let json = serde_json::to_value(pins()).unwrap();
        assert_eq!(json["stock_level"], "medium");
        assert!(json["specs"].get("part_numbers").is_none());
        assert!(json["specs"].get("manufacturers").is_none());
        assert_eq!(json["specs"]["standards"][0], "AN");
    }

    #[test]
    fn test_chat_message_serialization() {
        let msg = ChatMessage {
            id: 7,
            text: "hello".to_string(),
            sender: Sender::Bot,
            timestamp: Utc::now(),
            action: Some(NavAction::new("Open Catalog", "#products")),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["sender"], "bot");
        assert_eq!(json["action"]["target_anchor"], "#products");

        let back: ChatMessage = serde_json::from_value(json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_inquiry_state_accepts_submission() {
        assert!(InquiryState::Idle.accepts_submission());
        assert!(!InquiryState::Submitting.accepts_submission());
        assert!(!InquiryState::Sent.accepts_submission());
        assert_eq!(InquiryState::default(), InquiryState::Idle);
    }
}
