//! Recurrence evaluator: is a chore active on a given calendar date?
//!
//! # Rules
//! - Never before `start`, never after `end` (when set).
//! - `none` occurs on `start` only, `daily` on every date, `weekly` on the
//!   weekday of `start`.
//! - `monthly` occurs on the day-of-month of `start`, clamped to the last
//!   day of months that are too short (a chore started on the 31st lands on
//!   Feb 29 in a leap year, Feb 28 otherwise, Apr 30, ...).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::calendar::{days_in_month, parse_calendar_date};
use super::ScheduleError;
use crate::household::Chore;

/// How often a chore repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    /// One-off, on the start date only.
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    /// Parse a stored recurrence label. Labels are lowercase and exact.
    pub fn parse(label: &str) -> Result<Self, ScheduleError> {
        match label {
            "none" => Ok(Self::None),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(ScheduleError::InvalidRecurrence(other.to_string())),
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for Recurrence {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A validated recurrence rule with its date bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub recurrence: Recurrence,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl Schedule {
    pub fn new(recurrence: Recurrence, start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self {
            recurrence,
            start,
            end,
        }
    }

    /// Build the schedule described by a stored chore.
    ///
    /// A blank `endDate` means "no end".
    pub fn from_chore(chore: &Chore) -> Result<Self, ScheduleError> {
        let recurrence = Recurrence::parse(&chore.recurrence)?;
        let start = parse_calendar_date(&chore.start_date)?;
        let end = match chore.end_date.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(parse_calendar_date(raw)?),
            _ => None,
        };
        Ok(Self::new(recurrence, start, end))
    }

    /// Whether an occurrence lands on `date`.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        if date < self.start {
            return false;
        }
        if matches!(self.end, Some(end) if date > end) {
            return false;
        }

        match self.recurrence {
            Recurrence::None => date == self.start,
            Recurrence::Daily => true,
            Recurrence::Weekly => date.weekday() == self.start.weekday(),
            Recurrence::Monthly => {
                let last = days_in_month(date.year(), date.month());
                date.day() == self.start.day().min(last)
            }
        }
    }
}

/// Decide whether `chore` occurs on `date`.
///
/// Fails with `InvalidDate` or `InvalidRecurrence` when the stored fields
/// cannot be interpreted.
pub fn occurs_on(chore: &Chore, date: NaiveDate) -> Result<bool, ScheduleError> {
    Ok(Schedule::from_chore(chore)?.occurs_on(date))
}

/// Like [`occurs_on`], but a chore with unusable fields simply never occurs.
pub fn occurs_on_lenient(chore: &Chore, date: NaiveDate) -> bool {
    match occurs_on(chore, date) {
        Ok(occurs) => occurs,
        Err(e) => {
            tracing::debug!(chore_id = %chore.id, error = %e, "Chore schedule unusable; treating as never occurring");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::calendar::{format_calendar_date, Period};

    fn date(s: &str) -> NaiveDate {
        parse_calendar_date(s).unwrap()
    }

    fn chore(recurrence: &str, start: &str, end: Option<&str>) -> Chore {
        Chore {
            recurrence: recurrence.to_string(),
            start_date: start.to_string(),
            end_date: end.map(str::to_string),
            ..Chore::fixture("c1", "Feed the fish")
        }
    }

    fn span(start: &str, end: &str) -> Period {
        Period::new(date(start), date(end)).unwrap()
    }

    #[test]
    fn nothing_occurs_before_start() {
        for rule in ["none", "daily", "weekly", "monthly"] {
            let c = chore(rule, "2024-03-10", None);
            assert!(!occurs_on(&c, date("2024-03-09")).unwrap(), "{rule}");
            assert!(occurs_on(&c, date("2024-03-10")).unwrap(), "{rule}");
        }
    }

    #[test]
    fn one_off_occurs_exactly_once_regardless_of_end() {
        for end in [None, Some("2024-12-31")] {
            let c = chore("none", "2024-03-10", end);
            let hits: Vec<_> = span("2024-01-01", "2024-12-31")
                .days()
                .filter(|d| occurs_on(&c, *d).unwrap())
                .collect();
            assert_eq!(hits, vec![date("2024-03-10")]);
        }
    }

    #[test]
    fn daily_without_end_occurs_every_day_from_start() {
        let c = chore("daily", "2024-02-27", None);
        assert!(span("2024-02-27", "2025-03-01")
            .days()
            .all(|d| occurs_on(&c, d).unwrap()));
    }

    #[test]
    fn single_day_window_occurs_once() {
        let c = chore("daily", "2024-03-01", Some("2024-03-01"));
        let hits: Vec<_> = span("2024-02-01", "2024-04-01")
            .days()
            .filter(|d| occurs_on(&c, *d).unwrap())
            .map(format_calendar_date)
            .collect();
        assert_eq!(hits, vec!["2024-03-01"]);
    }

    #[test]
    fn end_date_is_inclusive() {
        let c = chore("daily", "2024-03-01", Some("2024-03-05"));
        assert!(occurs_on(&c, date("2024-03-05")).unwrap());
        assert!(!occurs_on(&c, date("2024-03-06")).unwrap());
    }

    #[test]
    fn blank_end_date_means_open_ended() {
        let c = chore("daily", "2024-03-01", Some("  "));
        assert!(occurs_on(&c, date("2030-01-01")).unwrap());
    }

    #[test]
    fn weekly_matches_multiples_of_seven_days() {
        let start = date("2024-01-03");
        let c = chore("weekly", "2024-01-03", None);
        for d in span("2023-12-01", "2024-06-30").days() {
            let delta = (d - start).num_days();
            let expected = delta >= 0 && delta % 7 == 0;
            assert_eq!(occurs_on(&c, d).unwrap(), expected, "{d}");
        }
    }

    #[test]
    fn monthly_clamps_to_end_of_short_months() {
        let c = chore("monthly", "2024-01-31", None);
        assert!(occurs_on(&c, date("2024-02-29")).unwrap());
        assert!(!occurs_on(&c, date("2024-02-28")).unwrap());
        assert!(occurs_on(&c, date("2024-03-31")).unwrap());
        assert!(!occurs_on(&c, date("2024-03-30")).unwrap());
        assert!(occurs_on(&c, date("2024-04-30")).unwrap());
        assert!(!occurs_on(&c, date("2024-04-29")).unwrap());
        assert!(occurs_on(&c, date("2025-02-28")).unwrap());
    }

    #[test]
    fn monthly_occurs_once_per_month() {
        let c = chore("monthly", "2024-01-30", None);
        let hits: Vec<_> = span("2024-01-01", "2024-12-31")
            .days()
            .filter(|d| occurs_on(&c, *d).unwrap())
            .map(format_calendar_date)
            .collect();
        assert_eq!(hits.len(), 12);
        assert_eq!(hits[1], "2024-02-29");
        assert_eq!(hits[2], "2024-03-30");
    }

    #[test]
    fn monthly_on_early_day_never_clamps() {
        let c = chore("monthly", "2024-01-15", None);
        assert!(occurs_on(&c, date("2024-02-15")).unwrap());
        assert!(!occurs_on(&c, date("2024-02-29")).unwrap());
    }

    #[test]
    fn unknown_recurrence_is_an_error() {
        let c = chore("fortnightly", "2024-01-01", None);
        assert_eq!(
            occurs_on(&c, date("2024-01-01")),
            Err(ScheduleError::InvalidRecurrence("fortnightly".into()))
        );
        assert!(!occurs_on_lenient(&c, date("2024-01-01")));
    }

    #[test]
    fn recurrence_labels_are_case_sensitive() {
        assert!(Recurrence::parse("Daily").is_err());
        assert_eq!("weekly".parse::<Recurrence>(), Ok(Recurrence::Weekly));
    }

    #[test]
    fn malformed_dates_are_errors() {
        let c = chore("daily", "not-a-date", None);
        assert!(matches!(
            occurs_on(&c, date("2024-01-01")),
            Err(ScheduleError::InvalidDate(_))
        ));
        let c = chore("daily", "2024-01-01", Some("soon"));
        assert!(matches!(
            occurs_on(&c, date("2024-01-01")),
            Err(ScheduleError::InvalidDate(_))
        ));
        assert!(!occurs_on_lenient(&c, date("2024-01-01")));
    }
}
