//! Period statistics: occurrence aggregation, top performer and grades.
//!
//! Everything here is a pure function of the chores, members and period it
//! is handed. Totals are rebuilt from scratch on every call.

pub mod aggregate;
pub mod grade;
pub mod leaderboard;

pub use aggregate::{aggregate_for_period, occurrences_between, occurrences_on, DayOccurrences, PeriodTotals, UNASSIGNED};
pub use grade::ManagerGrade;
pub use leaderboard::{select_top_performer, TopPerformer};
