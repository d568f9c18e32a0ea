//! Occurrence aggregation over a calendar span.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::household::{Chore, Member};
use crate::schedule::{format_calendar_date, occurs_on_lenient, Period, Schedule};

/// Bucket for scheduled occurrences no known member is credited with.
pub const UNASSIGNED: &str = "unassigned";

/// Per-member completion and scheduling totals for one period.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    /// Completion credit; team chores contribute halves.
    pub completed_counts: BTreeMap<String, f64>,
    /// Scheduled occurrences; `unassigned` appears once something lands in it.
    pub scheduled_counts: BTreeMap<String, u32>,
}

impl PeriodTotals {
    /// Zero entries for every member.
    fn seeded(members: &[Member]) -> Self {
        let mut totals = Self::default();
        for member in members {
            totals.completed_counts.insert(member.id.clone(), 0.0);
            totals.scheduled_counts.insert(member.id.clone(), 0);
        }
        totals
    }

    pub fn completed(&self, member_id: &str) -> f64 {
        self.completed_counts.get(member_id).copied().unwrap_or(0.0)
    }

    pub fn scheduled(&self, member_id: &str) -> u32 {
        self.scheduled_counts.get(member_id).copied().unwrap_or(0)
    }

    fn record_occurrence(&mut self, chore: &Chore, date_key: &str) {
        let mut credited = false;
        for id in chore.assignees() {
            if let Some(count) = self.scheduled_counts.get_mut(id) {
                *count += 1;
                credited = true;
            }
        }
        if !credited {
            *self.scheduled_counts.entry(UNASSIGNED.to_string()).or_insert(0) += 1;
        }

        if !chore.is_completed_on(date_key) {
            return;
        }
        let split = chore.is_team_task && chore.assigned_to_id.is_some() && chore.co_assignee_id.is_some();
        if split {
            for id in chore.assignees() {
                if let Some(credit) = self.completed_counts.get_mut(id) {
                    *credit += 0.5;
                }
            }
        } else if let Some(credit) = chore
            .assigned_to_id
            .as_deref()
            .and_then(|id| self.completed_counts.get_mut(id))
        {
            *credit += 1.0;
        }
    }
}

/// Chores that occur on `date`, in input order.
pub fn occurrences_on(chores: &[Chore], date: NaiveDate) -> Vec<&Chore> {
    chores.iter().filter(|c| occurs_on_lenient(c, date)).collect()
}

/// Chores occurring on one date of a span.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOccurrences {
    pub date: String,
    pub chore_ids: Vec<String>,
}

/// One entry per date of `period`, listing the ids of the chores that occur.
pub fn occurrences_between(chores: &[Chore], period: &Period) -> Vec<DayOccurrences> {
    let scheduled = usable_schedules(chores);
    period
        .days()
        .map(|day| DayOccurrences {
            date: format_calendar_date(day),
            chore_ids: scheduled
                .iter()
                .filter(|(_, schedule)| schedule.occurs_on(day))
                .map(|(chore, _)| chore.id.clone())
                .collect(),
        })
        .collect()
}

/// Count scheduled occurrences and completion credit per member over `period`.
///
/// Completions recorded on dates the chore does not occur on are ignored, as
/// are completions outside the period. Credit only goes to ids present in
/// `members`.
pub fn aggregate_for_period(chores: &[Chore], members: &[Member], period: &Period) -> PeriodTotals {
    let mut totals = PeriodTotals::seeded(members);
    let scheduled = usable_schedules(chores);

    for day in period.days() {
        let key = format_calendar_date(day);
        for (chore, schedule) in &scheduled {
            if schedule.occurs_on(day) {
                totals.record_occurrence(chore, &key);
            }
        }
    }
    totals
}

/// Pair each chore with its schedule, skipping chores whose fields cannot
/// be interpreted.
fn usable_schedules(chores: &[Chore]) -> Vec<(&Chore, Schedule)> {
    chores
        .iter()
        .filter_map(|chore| match chore.schedule() {
            Ok(schedule) => Some((chore, schedule)),
            Err(e) => {
                tracing::debug!(chore_id = %chore.id, error = %e, "Skipping chore with unusable schedule");
                None
            }
        })
        .collect()
}
