//! # dispo-engine
//!
//! Turns a day-by-day list of scheduled segments (courses, breaks, weekends) into
//! an hourly availability grid from 08:00 to 22:00, reserving transition hours
//! around blocked segments.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use dispo_engine::{EngineConfig, Schedule};
//!
//! let json = r#"{"schedule_availability":[{"date":"2025-09-01","day":"Lundi","slots":[
//!     {"start_time":"08:00","end_time":"10:00","availability":"BLOCKED","event_type":"COURS"}
//! ]}]}"#;
//! let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
//! let schedule = Schedule::from_json(json, today, &EngineConfig::default()).unwrap();
//!
//! let monday = &schedule.visible()[0];
//! assert_eq!(monday.is_available(9), Some(false));
//! assert_eq!(monday.is_available(10), Some(false)); // post-buffer
//! assert_eq!(monday.is_available(11), Some(false)); // trailing buffer
//! assert_eq!(monday.available_count(), 11);
//! ```
//!
//! ## Modules
//!
//! - [`grid`] — The fixed 08:00–22:00 hour markers
//! - [`model`] — Raw dataset types (slots, days)
//! - [`calculator`] — One day's segments → hourly availability, with buffer policies
//! - [`processor`] — Whole-dataset processing and today lookup
//! - [`navigator`] — 7-day paging window
//! - [`export`] — Export records for the visible days
//! - [`session`] — Owner of the processed list and window
//! - [`config`] — TOML engine configuration
//! - [`error`] — Error types

pub mod calculator;
pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod model;
pub mod navigator;
pub mod processor;
pub mod session;

pub use calculator::{compute, compute_with, BufferPolicy, DayAvailability, HourRange};
pub use config::EngineConfig;
pub use error::DispoError;
pub use export::{export, ExportRecord};
pub use grid::HourMarker;
pub use model::{AvailabilityStatus, Dataset, RawSlot, ScheduleDay};
pub use navigator::{WeekWindow, WEEK_LEN};
pub use processor::{locate, process, process_with, week_start_for};
pub use session::Schedule;
