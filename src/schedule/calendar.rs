//! Calendar-date parsing, formatting and statistics periods.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ScheduleError;

/// Wire format for every date exchanged with clients and stored on disk.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string. Years outside `0000..=9999` are rejected.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .ok()
        .filter(|date| (0..=9999).contains(&date.year()))
        .ok_or_else(|| ScheduleError::InvalidDate(value.to_string()))
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Which kind of statistics window to build around a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// Sunday through Saturday.
    Week,
    /// First through last day of the month.
    Month,
}

impl PeriodKind {
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for PeriodKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(format!("unknown period: {other}")),
        }
    }
}

/// An inclusive span of calendar dates.
///
/// # Invariants
/// - `start <= end` (enforced by every constructor)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ScheduleError> {
        if end < start {
            return Err(ScheduleError::InvertedPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// The Sunday-to-Saturday week containing `date`.
    ///
    /// Fails for weeks that run past the range `NaiveDate` can represent.
    pub fn week_containing(date: NaiveDate) -> Result<Self, ScheduleError> {
        let offset = i64::from(date.weekday().num_days_from_sunday());
        let start = date.checked_sub_signed(Duration::days(offset));
        let end = start.and_then(|s| s.checked_add_signed(Duration::days(6)));
        match (start, end) {
            (Some(start), Some(end)) => Ok(Self { start, end }),
            _ => Err(ScheduleError::InvalidDate(format_calendar_date(date))),
        }
    }

    /// The calendar month containing `date`.
    pub fn month_containing(date: NaiveDate) -> Self {
        let last = days_in_month(date.year(), date.month());
        Self {
            start: date.with_day(1).unwrap_or(date),
            end: date.with_day(last).unwrap_or(date),
        }
    }

    pub fn containing(kind: PeriodKind, date: NaiveDate) -> Result<Self, ScheduleError> {
        match kind {
            PeriodKind::Week => Self::week_containing(date),
            PeriodKind::Month => Ok(Self::month_containing(date)),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of dates in the span (both ends included).
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Every date of the span, in order, each exactly once.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}
