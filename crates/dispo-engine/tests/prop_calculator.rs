//! Property-based tests for the calculator and the week window using proptest.
//!
//! These check invariants that must hold for any day and any paging sequence,
//! not just the worked examples in `calculator_tests.rs` and `navigator_tests.rs`.

use chrono::NaiveDate;
use dispo_engine::calculator::{compute, compute_with, BufferPolicy};
use dispo_engine::model::{AvailabilityStatus, RawSlot, ScheduleDay};
use dispo_engine::navigator::{WeekWindow, WEEK_LEN};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("COURS".to_string()),
        Just("Break".to_string()),
        Just("Buffer".to_string()),
        Just("Weekend".to_string()),
        Just("No class".to_string()),
    ]
}

fn arb_status() -> impl Strategy<Value = AvailabilityStatus> {
    prop_oneof![
        Just(AvailabilityStatus::Available),
        Just(AvailabilityStatus::Blocked),
    ]
}

/// Slots with hours spanning the whole day, so some fall off the grid and some
/// are inverted.
fn arb_slot() -> impl Strategy<Value = RawSlot> {
    (0u32..=24, 0u32..=24, arb_status(), arb_label()).prop_map(|(start, end, status, label)| {
        RawSlot::new(format!("{:02}:00", start), format!("{:02}:00", end), status, label)
    })
}

fn arb_day() -> impl Strategy<Value = ScheduleDay> {
    prop::collection::vec(arb_slot(), 0..8).prop_map(|slots| {
        ScheduleDay::new(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(), "Lundi", slots)
    })
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Next,
    Prev,
    Reset,
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![Just(Step::Next), Just(Step::Prev), Just(Step::Reset)]
}

fn unavailable_hours(day: &ScheduleDay, policy: BufferPolicy) -> Vec<u32> {
    compute_with(day, policy)
        .hours()
        .filter(|(_, free)| !free)
        .map(|(marker, _)| marker.hour())
        .collect()
}

// ---------------------------------------------------------------------------
// Calculator properties
// ---------------------------------------------------------------------------

proptest! {
    /// The cached count always matches the live hour map.
    #[test]
    fn available_count_matches_hours(day in arb_day()) {
        let av = compute(&day);
        let live = av.hours().filter(|(_, free)| *free).count();
        prop_assert_eq!(av.available_count(), live);
        prop_assert_eq!(av.available_hours().count(), live);
    }

    /// Computing twice yields identical results.
    #[test]
    fn compute_is_deterministic(day in arb_day()) {
        prop_assert_eq!(compute(&day), compute(&day));
    }

    /// A richer buffer policy never frees an hour a simpler one blocks.
    #[test]
    fn richer_policy_never_frees_hours(day in arb_day()) {
        for pair in BufferPolicy::ALL.windows(2) {
            let simpler = unavailable_hours(&day, pair[0]);
            let richer = unavailable_hours(&day, pair[1]);
            for hour in &simpler {
                prop_assert!(
                    richer.contains(hour),
                    "{:?} freed {} blocked under {:?}", pair[1], hour, pair[0]
                );
            }
        }
    }

    /// Slot order does not matter.
    #[test]
    fn slot_order_is_irrelevant(day in arb_day()) {
        let mut reversed = day.clone();
        reversed.slots.reverse();
        prop_assert_eq!(compute(&day), compute(&reversed));
    }

    /// Free ranges cover exactly the available hours.
    #[test]
    fn free_ranges_cover_available_hours(day in arb_day()) {
        let av = compute(&day);
        let covered: u32 = av.free_ranges().iter().map(|r| r.hours()).sum();
        prop_assert_eq!(covered as usize, av.available_count());
    }
}

// ---------------------------------------------------------------------------
// Navigator properties
// ---------------------------------------------------------------------------

proptest! {
    /// The offset stays a week boundary inside the list, whatever the paging.
    #[test]
    fn offset_stays_in_bounds(
        total in 1usize..60,
        steps in prop::collection::vec(arb_step(), 0..40),
    ) {
        let mut window = WeekWindow::new(total);
        for step in steps {
            match step {
                Step::Next => window.next(),
                Step::Prev => window.prev(),
                Step::Reset => window.reset(),
            }
            prop_assert!(window.offset() < total);
            prop_assert_eq!(window.offset() % WEEK_LEN, 0);
        }
    }

    /// Visible slices are never longer than a week and never empty for a non-empty list.
    #[test]
    fn visible_is_at_most_a_week(total in 1usize..60, nexts in 0usize..12) {
        let items: Vec<usize> = (0..total).collect();
        let mut window = WeekWindow::new(total);
        for _ in 0..nexts {
            window.next();
        }
        let visible = window.visible(&items);
        prop_assert!(!visible.is_empty());
        prop_assert!(visible.len() <= WEEK_LEN);
        prop_assert_eq!(visible[0], window.offset());
    }
}
