//! The single owner of a processed schedule and its week window.
//!
//! A [`Schedule`] is built once per dataset load and replaced wholesale on
//! reload. "Today" is passed in at construction and never re-read, so paging
//! stays stable for the lifetime of the value. Callers sharing one schedule
//! across threads wrap it in a single `Mutex`.

use chrono::NaiveDate;
use tracing::info;

use crate::calculator::DayAvailability;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::export::{self, ExportRecord};
use crate::model::{Dataset, ScheduleDay};
use crate::navigator::WeekWindow;
use crate::processor;

#[derive(Debug, Clone)]
pub struct Schedule {
    days: Vec<DayAvailability>,
    window: WeekWindow,
}

impl Schedule {
    /// Process `days` and open the window on the week containing `today`.
    ///
    /// # Errors
    /// Returns `DispoError::InvalidInput` when `config.validate_order` is set and
    /// the dates are not strictly ascending.
    pub fn load(days: &[ScheduleDay], today: NaiveDate, config: &EngineConfig) -> Result<Self> {
        if config.validate_order {
            processor::validate_order(days)?;
        }
        let days = processor::process_with(days, config.buffer_policy);
        let window = WeekWindow::aligned_to(&days, today);
        info!(
            days = days.len(),
            offset = window.offset(),
            policy = ?config.buffer_policy,
            "schedule loaded"
        );
        Ok(Self { days, window })
    }

    /// Parse a JSON dataset and [`load`](Self::load) it.
    ///
    /// # Errors
    /// Returns `DispoError::Json` for a malformed document, or any error from `load`.
    pub fn from_json(json: &str, today: NaiveDate, config: &EngineConfig) -> Result<Self> {
        let dataset = Dataset::from_json(json)?;
        Self::load(dataset.days(), today, config)
    }

    pub fn days(&self) -> &[DayAvailability] {
        &self.days
    }

    pub fn window(&self) -> WeekWindow {
        self.window
    }

    pub fn next(&mut self) {
        self.window.next();
    }

    pub fn prev(&mut self) {
        self.window.prev();
    }

    pub fn reset(&mut self) {
        self.window.reset();
    }

    pub fn visible(&self) -> &[DayAvailability] {
        self.window.visible(&self.days)
    }

    pub fn export_visible(&self) -> Vec<ExportRecord> {
        export::export(self.visible())
    }
}
