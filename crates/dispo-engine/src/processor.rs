//! Apply the calculator across a whole dataset and find "today" in the result.

use chrono::NaiveDate;
use tracing::debug;

use crate::calculator::{self, BufferPolicy, DayAvailability};
use crate::error::{DispoError, Result};
use crate::model::ScheduleDay;
use crate::navigator::WEEK_LEN;

/// Anything carrying a calendar date, so lookups work on raw and processed days alike.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for ScheduleDay {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for DayAvailability {
    fn date(&self) -> NaiveDate {
        DayAvailability::date(self)
    }
}

/// Compute every day under the default buffer policy, preserving input order.
pub fn process(days: &[ScheduleDay]) -> Vec<DayAvailability> {
    process_with(days, BufferPolicy::default())
}

/// Compute every day under `policy`. The output has one entry per input day, in
/// input order.
pub fn process_with(days: &[ScheduleDay], policy: BufferPolicy) -> Vec<DayAvailability> {
    days.iter()
        .map(|day| {
            let availability = calculator::compute_with(day, policy);
            debug!(
                date = %availability.date(),
                available = availability.available_count(),
                "processed day"
            );
            availability
        })
        .collect()
}

/// Index of the first day whose date equals `target`.
pub fn locate<D: Dated>(days: &[D], target: NaiveDate) -> Option<usize> {
    days.iter().position(|day| day.date() == target)
}

/// Offset of the 7-day block containing `today`, or 0 when `today` is absent.
///
/// Blocks are counted from the start of the list, not from calendar weeks.
pub fn week_start_for<D: Dated>(days: &[D], today: NaiveDate) -> usize {
    locate(days, today).map_or(0, |idx| idx / WEEK_LEN * WEEK_LEN)
}

/// Check that dates are strictly ascending (which also rules out duplicates).
///
/// The engine never sorts; callers that do not trust their source can run this
/// before processing.
///
/// # Errors
/// Returns `DispoError::InvalidInput` naming the first out-of-order pair.
pub fn validate_order<D: Dated>(days: &[D]) -> Result<()> {
    for (idx, pair) in days.windows(2).enumerate() {
        let (prev, next) = (pair[0].date(), pair[1].date());
        if next <= prev {
            return Err(DispoError::InvalidInput(format!(
                "day {} ({}) does not come after day {} ({})",
                idx + 1,
                next,
                idx,
                prev
            )));
        }
    }
    Ok(())
}
