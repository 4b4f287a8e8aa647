use serde::{Deserialize, Serialize};

/// Lifecycle state of an event. Stored and serialized lowercase;
/// input is accepted case-insensitively by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Active,
    Cancelled,
    Completed,
    Postponed,
}

impl EventStatus {
    pub const ALLOWED: [&'static str; 4] = ["active", "cancelled", "completed", "postponed"];

    /// Case-insensitive parse; `None` for anything outside the allowed set.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "cancelled" => Some(Self::Cancelled),
            "completed" => Some(Self::Completed),
            "postponed" => Some(Self::Postponed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
            Self::Postponed => "postponed",
        }
    }
}

impl Default for EventStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// A stored event record. `event_id` is assigned at creation and
/// immutable afterwards; `date` keeps the caller's original string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub capacity: u32,
    pub organizer: String,
    pub status: EventStatus,
}

/// Create-request body. `capacity` and `status` arrive as raw wire
/// values so the validator owns the range and allowed-value checks.
#[derive(Debug, Clone, Deserialize)]
pub struct EventCreate {
    #[serde(rename = "eventId", default)]
    pub event_id: Option<String>,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub capacity: i64,
    pub organizer: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Update-request body. An absent field means "do not touch"; the
/// validator only checks fields that are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub capacity: Option<i64>,
    #[serde(default)]
    pub organizer: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
