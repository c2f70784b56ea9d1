//! Raw schedule input as delivered by the data source.
//!
//! The dataset is a JSON document with a top-level `schedule_availability`
//! array of days, each holding the day's scheduled segments:
//!
//! ```json
//! {
//!   "schedule_availability": [
//!     {
//!       "date": "2025-09-01",
//!       "day": "Lundi",
//!       "slots": [
//!         { "start_time": "08:00", "end_time": "12:00",
//!           "availability": "BLOCKED", "event_type": "COURS" }
//!       ]
//!     }
//!   ]
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Label of the lunch break. Breaks block and buffer even when not `BLOCKED`.
pub const BREAK_LABEL: &str = "Break";

/// Label of filler segments the source already inserted as buffers. These are
/// never treated as blocking input, so buffers are not applied twice.
pub const BUFFER_LABEL: &str = "Buffer";

/// Whether a segment removes availability.
///
/// Decoding is lenient: `"BLOCKED"` maps to [`Blocked`](Self::Blocked) and any
/// other literal (normally `"DISPONIBLE"`) maps to [`Available`](Self::Available).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AvailabilityStatus {
    #[default]
    Available,
    Blocked,
}

impl From<String> for AvailabilityStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "BLOCKED" => Self::Blocked,
            _ => Self::Available,
        }
    }
}

impl From<AvailabilityStatus> for String {
    fn from(status: AvailabilityStatus) -> Self {
        match status {
            AvailabilityStatus::Available => "DISPONIBLE".to_string(),
            AvailabilityStatus::Blocked => "BLOCKED".to_string(),
        }
    }
}

/// One scheduled segment within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSlot {
    /// `HH:MM`; only the hour is significant.
    pub start_time: String,
    /// `HH:MM`; only the hour is significant.
    pub end_time: String,
    #[serde(rename = "availability", default)]
    pub availability_status: AvailabilityStatus,
    #[serde(default)]
    pub event_type: String,
}

impl RawSlot {
    pub fn new(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        availability_status: AvailabilityStatus,
        event_type: impl Into<String>,
    ) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            availability_status,
            event_type: event_type.into(),
        }
    }

    /// The `[start, end)` hour span of this slot.
    ///
    /// The start is floored and the end rounded up to the hour, so every hour the
    /// slot touches is covered: `09:15-09:45` spans `(9, 10)`.
    ///
    /// Returns `None` when either time is malformed or the times are empty or
    /// inverted; such slots carry no usable interval.
    pub fn hour_span(&self) -> Option<(u32, u32)> {
        let (start_hour, start_minute) = parse_time(&self.start_time)?;
        let (end_hour, end_minute) = parse_time(&self.end_time)?;
        if (start_hour, start_minute) >= (end_hour, end_minute) {
            return None;
        }
        Some((start_hour, end_hour + u32::from(end_minute > 0)))
    }

    pub fn is_blocked(&self) -> bool {
        self.availability_status == AvailabilityStatus::Blocked
    }

    pub fn is_break(&self) -> bool {
        self.event_type == BREAK_LABEL
    }

    pub fn is_buffer_filler(&self) -> bool {
        self.event_type == BUFFER_LABEL
    }

    /// Blocked or a break, and not pre-buffered filler.
    pub fn is_blocking(&self) -> bool {
        (self.is_blocked() || self.is_break()) && !self.is_buffer_filler()
    }

    /// Scheduled instruction: blocked, neither a break nor filler.
    pub fn is_instruction(&self) -> bool {
        self.is_blocked() && !self.is_break() && !self.is_buffer_filler()
    }

    /// Free time as listed by the source, excluding buffer filler.
    pub fn is_open(&self) -> bool {
        !self.is_blocked() && !self.is_buffer_filler()
    }
}

/// Parse `HH:MM` into `(hour, minute)`. `24:00` is accepted as the end of the day.
fn parse_time(raw: &str) -> Option<(u32, u32)> {
    let (hour, minute) = raw.trim().split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    match (hour, minute) {
        (0..=23, 0..=59) | (24, 0) => Some((hour, minute)),
        _ => None,
    }
}

/// One calendar day of raw input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub date: NaiveDate,
    /// Display-only label such as `"Lundi"`.
    #[serde(rename = "day", default)]
    pub weekday_label: String,
    #[serde(default)]
    pub slots: Vec<RawSlot>,
}

impl ScheduleDay {
    pub fn new(date: NaiveDate, weekday_label: impl Into<String>, slots: Vec<RawSlot>) -> Self {
        Self {
            date,
            weekday_label: weekday_label.into(),
            slots,
        }
    }

    /// Slots the source lists as available, excluding buffer filler.
    pub fn open_slots(&self) -> impl Iterator<Item = &RawSlot> {
        self.slots.iter().filter(|slot| slot.is_open())
    }
}

/// The full input document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub schedule_availability: Vec<ScheduleDay>,
}

impl Dataset {
    /// Parse a dataset from its JSON form.
    ///
    /// # Errors
    /// Returns `DispoError::Json` if the document does not match the dataset shape
    /// (including dates that are not `YYYY-MM-DD`).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn days(&self) -> &[ScheduleDay] {
        &self.schedule_availability
    }
}
