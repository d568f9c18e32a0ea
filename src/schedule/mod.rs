//! Chore scheduling: calendar-date helpers and the recurrence evaluator.
//!
//! # Invariants
//! - All arithmetic is on `NaiveDate` (year, month, day). Nothing here sees a
//!   time of day or a timezone.
//! - Evaluation is pure: no I/O, no shared state, deterministic per input.

pub mod calendar;
pub mod recurrence;

pub use calendar::{
    days_in_month, format_calendar_date, parse_calendar_date, Period, PeriodKind, DATE_FORMAT,
};
pub use recurrence::{occurs_on, occurs_on_lenient, Recurrence, Schedule};

use chrono::NaiveDate;

/// Errors raised while turning stored chore fields into a schedule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("Invalid calendar date {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid recurrence {0:?} (expected none, daily, weekly or monthly)")]
    InvalidRecurrence(String),

    #[error("Period end {end} is before its start {start}")]
    InvertedPeriod { start: NaiveDate, end: NaiveDate },
}
