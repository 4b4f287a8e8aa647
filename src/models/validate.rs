//! Field validation and the update field mask.
//!
//! Pure functions: no I/O, no store access. Every rule is checked
//! independently and all failures are collected before reporting, so a
//! bad payload comes back with the complete error list in one pass.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::event::{Event, EventCreate, EventStatus, EventUpdate};

pub const TITLE_MAX: usize = 200;
pub const DESCRIPTION_MAX: usize = 2000;
pub const LOCATION_MAX: usize = 300;
pub const ORGANIZER_MAX: usize = 200;
pub const CAPACITY_MAX: i64 = 100_000;

pub const DATE_FORMAT_MESSAGE: &str =
    "Date must be in ISO format (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)";
pub const STATUS_MESSAGE: &str =
    "Status must be one of: active, cancelled, completed, postponed";

/// One failed field check, in the wire shape the client receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>, kind: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
            kind: kind.to_string(),
        }
    }
}

/// A validated create payload; the id (if any) has not been assigned yet.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub event_id: Option<String>,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub capacity: u32,
    pub organizer: String,
    pub status: EventStatus,
}

/// One field of an update, tagged with its normalized new value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPatch {
    Title(String),
    Description(String),
    Date(String),
    Location(String),
    Capacity(u32),
    Organizer(String),
    Status(EventStatus),
}

impl FieldPatch {
    /// Overwrite the one field this patch names on `record`.
    pub fn apply_to(&self, record: &mut Event) {
        match self {
            Self::Title(v) => record.title = v.clone(),
            Self::Description(v) => record.description = v.clone(),
            Self::Date(v) => record.date = v.clone(),
            Self::Location(v) => record.location = v.clone(),
            Self::Capacity(v) => record.capacity = *v,
            Self::Organizer(v) => record.organizer = v.clone(),
            Self::Status(v) => record.status = *v,
        }
    }

    /// Stored attribute name this patch targets.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Description(_) => "description",
            Self::Date(_) => "date",
            Self::Location(_) => "location",
            Self::Capacity(_) => "capacity",
            Self::Organizer(_) => "organizer",
            Self::Status(_) => "status",
        }
    }
}

/// The set of fields an update explicitly supplies, in declaration
/// order, at most one patch per field. Empty means the update is a
/// no-op and must not reach the store's patch primitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSet {
    patches: Vec<FieldPatch>,
}

impl UpdateSet {
    pub fn push(&mut self, patch: FieldPatch) {
        self.patches.push(patch);
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldPatch> {
        self.patches.iter()
    }
}

/// Validate a create payload. All fields are required here (serde has
/// already rejected structurally missing ones); `status` falls back to
/// `active` when omitted.
pub fn validate_create(payload: &EventCreate) -> Result<NewEvent, Vec<FieldError>> {
    let mut errors = Vec::new();

    check_text("title", &payload.title, TITLE_MAX, &mut errors);
    check_text("description", &payload.description, DESCRIPTION_MAX, &mut errors);
    check_date("date", &payload.date, &mut errors);
    check_text("location", &payload.location, LOCATION_MAX, &mut errors);
    let capacity = check_capacity("capacity", payload.capacity, &mut errors);
    check_text("organizer", &payload.organizer, ORGANIZER_MAX, &mut errors);
    let status = match payload.status.as_deref() {
        Some(raw) => check_status("status", raw, &mut errors),
        None => Some(EventStatus::Active),
    };

    match (capacity, status) {
        (Some(capacity), Some(status)) if errors.is_empty() => Ok(NewEvent {
            event_id: payload.event_id.clone(),
            title: payload.title.clone(),
            description: payload.description.clone(),
            date: payload.date.clone(),
            location: payload.location.clone(),
            capacity,
            organizer: payload.organizer.clone(),
            status,
        }),
        _ => Err(errors),
    }
}

/// Validate an update payload and build the field mask from the fields
/// it actually supplies. An empty mask is a valid outcome; the caller
/// decides whether that is a no-op or a bad request.
pub fn validate_update(payload: &EventUpdate) -> Result<UpdateSet, Vec<FieldError>> {
    let mut errors = Vec::new();
    let mut set = UpdateSet::default();

    if let Some(value) = &payload.title {
        if check_text("title", value, TITLE_MAX, &mut errors) {
            set.push(FieldPatch::Title(value.clone()));
        }
    }
    if let Some(value) = &payload.description {
        if check_text("description", value, DESCRIPTION_MAX, &mut errors) {
            set.push(FieldPatch::Description(value.clone()));
        }
    }
    if let Some(value) = &payload.date {
        if check_date("date", value, &mut errors) {
            set.push(FieldPatch::Date(value.clone()));
        }
    }
    if let Some(value) = &payload.location {
        if check_text("location", value, LOCATION_MAX, &mut errors) {
            set.push(FieldPatch::Location(value.clone()));
        }
    }
    if let Some(value) = payload.capacity {
        if let Some(capacity) = check_capacity("capacity", value, &mut errors) {
            set.push(FieldPatch::Capacity(capacity));
        }
    }
    if let Some(value) = &payload.organizer {
        if check_text("organizer", value, ORGANIZER_MAX, &mut errors) {
            set.push(FieldPatch::Organizer(value.clone()));
        }
    }
    if let Some(raw) = payload.status.as_deref() {
        if let Some(status) = check_status("status", raw, &mut errors) {
            set.push(FieldPatch::Status(status));
        }
    }

    if errors.is_empty() {
        Ok(set)
    } else {
        Err(errors)
    }
}

/// Length check for string fields. Whitespace-only counts as empty and
/// fails the minimum; the maximum is measured in characters.
fn check_text(field: &str, value: &str, max: usize, errors: &mut Vec<FieldError>) -> bool {
    if value.trim().is_empty() {
        errors.push(FieldError::new(
            field,
            "String should have at least 1 character",
            "string_too_short",
        ));
        false
    } else if value.chars().count() > max {
        errors.push(FieldError::new(
            field,
            format!("String should have at most {max} characters"),
            "string_too_long",
        ));
        false
    } else {
        true
    }
}

fn check_capacity(field: &str, value: i64, errors: &mut Vec<FieldError>) -> Option<u32> {
    if value <= 0 {
        errors.push(FieldError::new(
            field,
            "Input should be greater than 0",
            "greater_than",
        ));
        None
    } else if value > CAPACITY_MAX {
        errors.push(FieldError::new(
            field,
            format!("Input should be less than or equal to {CAPACITY_MAX}"),
            "less_than_equal",
        ));
        None
    } else {
        Some(value as u32)
    }
}

fn check_date(field: &str, value: &str, errors: &mut Vec<FieldError>) -> bool {
    if is_iso_date(value) {
        true
    } else {
        errors.push(FieldError::new(field, DATE_FORMAT_MESSAGE, "value_error"));
        false
    }
}

/// ISO-8601 date or date-time, timezone-less or with an offset. The
/// original string is what gets stored, so this only has to accept.
fn is_iso_date(value: &str) -> bool {
    value.parse::<NaiveDate>().is_ok()
        || value.parse::<NaiveDateTime>().is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok()
}

fn check_status(field: &str, raw: &str, errors: &mut Vec<FieldError>) -> Option<EventStatus> {
    match EventStatus::parse(raw) {
        Some(status) => Some(status),
        None => {
            errors.push(FieldError::new(field, STATUS_MESSAGE, "value_error"));
            None
        }
    }
}
