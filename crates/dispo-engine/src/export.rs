//! Portable snapshot of the visible days.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculator::DayAvailability;
use crate::error::Result;

/// One exported day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub date: NaiveDate,
    pub weekday_label: String,
    pub available_hour_count: usize,
    /// Available markers as `HH:00`, in grid order.
    pub available_hour_list: Vec<String>,
}

impl From<&DayAvailability> for ExportRecord {
    fn from(day: &DayAvailability) -> Self {
        Self {
            date: day.date(),
            weekday_label: day.weekday_label().to_string(),
            available_hour_count: day.available_count(),
            available_hour_list: day.available_hours().map(|m| m.to_string()).collect(),
        }
    }
}

/// Project days one-to-one into export records, keeping their order.
pub fn export(days: &[DayAvailability]) -> Vec<ExportRecord> {
    days.iter().map(ExportRecord::from).collect()
}

/// Render records as a pretty-printed JSON document.
///
/// # Errors
/// Returns `DispoError::Json` if serialization fails.
pub fn to_json(records: &[ExportRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
