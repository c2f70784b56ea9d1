//! The fixed hourly scale every availability map is expressed against.
//!
//! Markers run from 08:00 to 22:00 inclusive in one-hour steps. A marker stands
//! for the hour that starts at that time, so a segment `[start, end)` covers the
//! markers `start..end`.

use std::fmt;

/// First marker on the grid (08:00).
pub const GRID_START: u32 = 8;
/// Last marker on the grid (22:00).
pub const GRID_END: u32 = 22;
/// Number of markers on the grid.
pub const GRID_LEN: usize = (GRID_END - GRID_START + 1) as usize;

/// One hour marker on the grid, stored as its hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourMarker(u32);

impl HourMarker {
    /// Returns the marker for `hour` if it lies on the grid.
    pub fn new(hour: u32) -> Option<Self> {
        contains(hour).then_some(Self(hour))
    }

    pub fn hour(self) -> u32 {
        self.0
    }

    /// Position of this marker within the grid.
    pub fn index(self) -> usize {
        (self.0 - GRID_START) as usize
    }
}

impl fmt::Display for HourMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// Whether `hour` has a marker on the grid.
pub fn contains(hour: u32) -> bool {
    (GRID_START..=GRID_END).contains(&hour)
}

/// Grid position of `hour`, or `None` when it falls outside the grid.
pub fn index_of(hour: u32) -> Option<usize> {
    HourMarker::new(hour).map(HourMarker::index)
}

/// All markers in grid order.
pub fn markers() -> impl Iterator<Item = HourMarker> + Clone {
    (GRID_START..=GRID_END).map(HourMarker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_fifteen_markers_from_eight_to_twenty_two() {
        let all: Vec<u32> = markers().map(HourMarker::hour).collect();
        assert_eq!(all.len(), GRID_LEN);
        assert_eq!(all.first(), Some(&8));
        assert_eq!(all.last(), Some(&22));
    }

    #[test]
    fn hours_outside_grid_have_no_marker() {
        assert_eq!(index_of(7), None);
        assert_eq!(index_of(23), None);
        assert_eq!(index_of(8), Some(0));
        assert_eq!(index_of(22), Some(14));
    }

    #[test]
    fn marker_formats_as_hh_00() {
        assert_eq!(HourMarker::new(9).map(|m| m.to_string()).as_deref(), Some("09:00"));
        assert_eq!(HourMarker::new(21).map(|m| m.to_string()).as_deref(), Some("21:00"));
    }
}
