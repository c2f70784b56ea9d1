//! Map one day's raw segments onto the hourly grid.
//!
//! Every marker starts available. Each blocking segment (blocked, or a lunch
//! break) clears the markers it covers, and the active [`BufferPolicy`] clears
//! neighbouring markers to leave transition time around it. The computation is
//! pure: malformed segments are skipped rather than reported.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grid::{self, HourMarker, GRID_END, GRID_LEN, GRID_START};
use crate::model::ScheduleDay;

/// How much transition time is reserved around blocking segments.
///
/// Each variant includes everything the previous one does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BufferPolicy {
    /// Only the covered hours are cleared.
    None,
    /// Also clear the hour before each instructional segment.
    PreCourse,
    /// Clear the hour before and the hour after every blocking segment.
    Symmetric,
    /// Symmetric, plus one extra hour after the day's last instructional segment.
    #[default]
    TrailingAfterLastCourse,
}

impl BufferPolicy {
    pub const ALL: [BufferPolicy; 4] = [
        BufferPolicy::None,
        BufferPolicy::PreCourse,
        BufferPolicy::Symmetric,
        BufferPolicy::TrailingAfterLastCourse,
    ];

    fn pre_buffers(self, instruction: bool) -> bool {
        match self {
            BufferPolicy::None => false,
            BufferPolicy::PreCourse => instruction,
            BufferPolicy::Symmetric | BufferPolicy::TrailingAfterLastCourse => true,
        }
    }

    fn post_buffers(self) -> bool {
        matches!(
            self,
            BufferPolicy::Symmetric | BufferPolicy::TrailingAfterLastCourse
        )
    }

    fn trailing_buffer(self) -> bool {
        self == BufferPolicy::TrailingAfterLastCourse
    }
}

/// A run of consecutive available hours, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
}

impl HourRange {
    pub fn hours(&self) -> u32 {
        self.end - self.start
    }
}

/// Availability of one day over the grid. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAvailability {
    date: NaiveDate,
    weekday_label: String,
    hours: [bool; GRID_LEN],
    available_count: usize,
}

impl DayAvailability {
    fn new(date: NaiveDate, weekday_label: String, hours: [bool; GRID_LEN]) -> Self {
        let available_count = hours.iter().filter(|&&free| free).count();
        Self {
            date,
            weekday_label,
            hours,
            available_count,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn weekday_label(&self) -> &str {
        &self.weekday_label
    }

    /// Every grid marker paired with its availability, in grid order.
    pub fn hours(&self) -> impl Iterator<Item = (HourMarker, bool)> + '_ {
        grid::markers().zip(self.hours.iter().copied())
    }

    /// Availability of the marker at `hour`, or `None` if it is off the grid.
    pub fn is_available(&self, hour: u32) -> Option<bool> {
        grid::index_of(hour).map(|idx| self.hours[idx])
    }

    pub fn available_count(&self) -> usize {
        self.available_count
    }

    pub fn has_availability(&self) -> bool {
        self.available_count > 0
    }

    /// Available markers in grid order.
    pub fn available_hours(&self) -> impl Iterator<Item = HourMarker> + '_ {
        self.hours().filter_map(|(marker, free)| free.then_some(marker))
    }

    /// Maximal runs of consecutive available markers.
    pub fn free_ranges(&self) -> Vec<HourRange> {
        let mut ranges: Vec<HourRange> = Vec::new();
        for marker in self.available_hours() {
            let hour = marker.hour();
            if let Some(last) = ranges.last_mut() {
                if last.end == hour {
                    last.end = hour + 1;
                    continue;
                }
            }
            ranges.push(HourRange {
                start: hour,
                end: hour + 1,
            });
        }
        ranges
    }
}

/// Compute a day's availability under the default policy
/// ([`BufferPolicy::TrailingAfterLastCourse`]).
pub fn compute(day: &ScheduleDay) -> DayAvailability {
    compute_with(day, BufferPolicy::default())
}

/// Compute a day's availability under `policy`.
///
/// For each blocking slot spanning `[start, end)`:
/// - the covered markers `start..end` are cleared;
/// - the pre-buffer clears `start - 1`, never below the first marker;
/// - the post-buffer clears `end`, unless `end` is the last marker.
///
/// Under the trailing policy, the marker at `latest_end + 1` is cleared too, where
/// `latest_end` is the latest end among instructional slots, provided
/// `latest_end < 21`. Markers outside the grid are never written.
pub fn compute_with(day: &ScheduleDay, policy: BufferPolicy) -> DayAvailability {
    let mut hours = [true; GRID_LEN];
    let mut latest_instruction_end: Option<u32> = None;

    for slot in day.slots.iter().filter(|slot| slot.is_blocking()) {
        let Some((start, end)) = slot.hour_span() else {
            debug!(
                date = %day.date,
                start_time = %slot.start_time,
                end_time = %slot.end_time,
                "skipping slot without a usable hour span"
            );
            continue;
        };

        for hour in start..end {
            clear(&mut hours, hour);
        }

        let instruction = slot.is_instruction();
        if policy.pre_buffers(instruction) && start > GRID_START {
            clear(&mut hours, start - 1);
        }
        if policy.post_buffers() && end < GRID_END {
            clear(&mut hours, end);
        }
        if instruction {
            latest_instruction_end = latest_instruction_end.max(Some(end));
        }
    }

    if policy.trailing_buffer() {
        if let Some(latest_end) = latest_instruction_end {
            if latest_end < GRID_END - 1 {
                clear(&mut hours, latest_end + 1);
            }
        }
    }

    DayAvailability::new(day.date, day.weekday_label.clone(), hours)
}

fn clear(hours: &mut [bool; GRID_LEN], hour: u32) {
    if let Some(idx) = grid::index_of(hour) {
        hours[idx] = false;
    }
}
