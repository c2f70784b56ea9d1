//! Sliding 7-day view over the processed day list.

use chrono::NaiveDate;

use crate::processor::{self, Dated};

/// Number of days shown at once.
pub const WEEK_LEN: usize = 7;

/// A page offset into a day list of fixed length.
///
/// Paging never wraps and never leaves `[0, total_days)`: stepping past either
/// end is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    offset: usize,
    total_days: usize,
}

impl WeekWindow {
    /// A window at offset 0 over `total_days` days.
    pub fn new(total_days: usize) -> Self {
        Self {
            offset: 0,
            total_days,
        }
    }

    /// A window positioned on the 7-day block that contains `today`.
    pub fn aligned_to<D: Dated>(days: &[D], today: NaiveDate) -> Self {
        Self {
            offset: processor::week_start_for(days, today),
            total_days: days.len(),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn total_days(&self) -> usize {
        self.total_days
    }

    pub fn has_next(&self) -> bool {
        self.offset + WEEK_LEN < self.total_days
    }

    pub fn has_prev(&self) -> bool {
        self.offset >= WEEK_LEN
    }

    /// Advance one week if a further week exists.
    pub fn next(&mut self) {
        if self.has_next() {
            self.offset += WEEK_LEN;
        }
    }

    /// Step back one week unless already on the first.
    pub fn prev(&mut self) {
        if self.has_prev() {
            self.offset -= WEEK_LEN;
        }
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// The days in view: `days[offset..offset + 7]`, shorter at the end of the list.
    pub fn visible<'a, T>(&self, days: &'a [T]) -> &'a [T] {
        let start = self.offset.min(days.len());
        let end = (self.offset + WEEK_LEN).min(days.len());
        &days[start..end]
    }
}
