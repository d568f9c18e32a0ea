//! Chores: definitions, write-time validation and completion tracking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{HouseholdData, HouseholdError, HouseholdResult, Inventory, ValidationError};
use crate::schedule::{format_calendar_date, parse_calendar_date, Recurrence, Schedule, ScheduleError};
use crate::util::{double_option, new_id, non_empty, now_string, null_default};

/// Chores whose title contains this phrase raid the treat jar when completed.
const TREAT_HEIST_PHRASE: &str = "steal treat";

fn default_recurrence() -> String {
    Recurrence::None.as_label().to_string()
}

/// A chore definition and its completion record.
///
/// Date and recurrence fields are kept as text so that hand-edited files
/// still load; [`Schedule::from_chore`] is where they get interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chore {
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, alias = "assignedTo")]
    pub assigned_to_id: Option<String>,
    /// Second assignee, only meaningful for team chores
    #[serde(default, alias = "coAssignee")]
    pub co_assignee_id: Option<String>,
    #[serde(default, alias = "isGuild", deserialize_with = "null_default")]
    pub is_team_task: bool,
    /// Missing means `none`; `null` loads as an empty (never-occurring) rule
    #[serde(default = "default_recurrence", deserialize_with = "null_default")]
    pub recurrence: String,
    #[serde(default, deserialize_with = "null_default")]
    pub start_date: String,
    #[serde(default, alias = "dueDate")]
    pub end_date: Option<String>,
    /// `YYYY-MM-DD` strings; a set stored as a list
    #[serde(default, deserialize_with = "null_default")]
    pub completed_dates: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub created_at: String,
}

impl Chore {
    pub fn schedule(&self) -> Result<Schedule, ScheduleError> {
        Schedule::from_chore(self)
    }

    /// Assignee ids: the primary one, then the co-assignee of a team chore.
    pub fn assignees(&self) -> impl Iterator<Item = &str> {
        let co = if self.is_team_task {
            self.co_assignee_id.as_deref()
        } else {
            None
        };
        self.assigned_to_id.as_deref().into_iter().chain(co)
    }

    pub fn is_assigned_to(&self, member_id: &str) -> bool {
        self.assignees().any(|id| id == member_id)
    }

    /// Membership test on the exact `YYYY-MM-DD` string.
    pub fn is_completed_on(&self, date_key: &str) -> bool {
        self.completed_dates.iter().any(|d| d == date_key)
    }

    pub fn is_treat_heist(&self) -> bool {
        self.title.to_lowercase().contains(TREAT_HEIST_PHRASE)
    }

    /// Drop `member_id` from this chore's assignees. Returns whether anything changed.
    pub(crate) fn unassign(&mut self, member_id: &str) -> bool {
        let mut changed = false;
        if self.co_assignee_id.as_deref() == Some(member_id) {
            self.co_assignee_id = None;
            changed = true;
        }
        if self.assigned_to_id.as_deref() == Some(member_id) {
            self.assigned_to_id = self.co_assignee_id.take();
            changed = true;
        }
        if changed && self.is_team_task {
            self.is_team_task = false;
            self.co_assignee_id = None;
        }
        changed
    }

    /// Normalise, validate and canonicalise a chore before it is stored.
    fn prepare(mut self, data: &HouseholdData) -> Result<Self, ValidationError> {
        self.title = self.title.trim().to_string();
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        self.assigned_to_id = non_empty(self.assigned_to_id.take());
        self.co_assignee_id = non_empty(self.co_assignee_id.take());
        self.end_date = non_empty(self.end_date.take());
        if !self.is_team_task {
            self.co_assignee_id = None;
        }

        let schedule = self.schedule()?;
        if let Some(end) = schedule.end {
            if end < schedule.start {
                return Err(ValidationError::EndBeforeStart {
                    start: format_calendar_date(schedule.start),
                    end: format_calendar_date(end),
                });
            }
        }
        self.start_date = format_calendar_date(schedule.start);
        self.end_date = schedule.end.map(format_calendar_date);

        if self.is_team_task {
            match (&self.assigned_to_id, &self.co_assignee_id) {
                (Some(a), Some(b)) if a != b => {}
                _ => return Err(ValidationError::TeamNeedsTwoAssignees),
            }
        }
        if let Some(unknown) = self.assignees().find(|id| !data.has_member(id)) {
            return Err(ValidationError::UnknownMember(unknown.to_string()));
        }

        let mut completed: Vec<String> = Vec::with_capacity(self.completed_dates.len());
        for raw in &self.completed_dates {
            let key = format_calendar_date(parse_calendar_date(raw)?);
            if !completed.contains(&key) {
                completed.push(key);
            }
        }
        self.completed_dates = completed;
        Ok(self)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChore {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "assignedTo")]
    pub assigned_to_id: Option<String>,
    #[serde(default, alias = "coAssignee")]
    pub co_assignee_id: Option<String>,
    #[serde(default, alias = "isGuild")]
    pub is_team_task: bool,
    #[serde(default)]
    pub recurrence: Option<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default, alias = "dueDate")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub completed_dates: Vec<String>,
}

/// Partial update; `null` clears the nullable fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChorePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, alias = "assignedTo", deserialize_with = "double_option")]
    pub assigned_to_id: Option<Option<String>>,
    #[serde(default, alias = "coAssignee", deserialize_with = "double_option")]
    pub co_assignee_id: Option<Option<String>>,
    #[serde(default, alias = "isGuild")]
    pub is_team_task: Option<bool>,
    pub recurrence: Option<String>,
    pub start_date: Option<String>,
    #[serde(default, alias = "dueDate", deserialize_with = "double_option")]
    pub end_date: Option<Option<String>>,
    pub completed_dates: Option<Vec<String>>,
}

impl ChorePatch {
    fn apply(self, chore: &mut Chore) {
        if let Some(title) = self.title {
            chore.title = title;
        }
        if let Some(description) = self.description {
            chore.description = description;
        }
        if let Some(assigned) = self.assigned_to_id {
            chore.assigned_to_id = assigned;
        }
        if let Some(co) = self.co_assignee_id {
            chore.co_assignee_id = co;
        }
        if let Some(team) = self.is_team_task {
            chore.is_team_task = team;
        }
        if let Some(recurrence) = self.recurrence {
            chore.recurrence = recurrence;
        }
        if let Some(start) = self.start_date {
            chore.start_date = start;
        }
        if let Some(end) = self.end_date {
            chore.end_date = end;
        }
        if let Some(completed) = self.completed_dates {
            chore.completed_dates = completed;
        }
    }
}

/// Result of marking or unmarking a completion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionOutcome {
    pub chore: Chore,
    pub inventory: Inventory,
}

impl HouseholdData {
    pub fn add_chore(&mut self, new: NewChore) -> HouseholdResult<Chore> {
        let chore = Chore {
            id: new_id(),
            title: new.title,
            description: new.description.unwrap_or_default(),
            assigned_to_id: new.assigned_to_id,
            co_assignee_id: new.co_assignee_id,
            is_team_task: new.is_team_task,
            recurrence: new.recurrence.unwrap_or_else(default_recurrence),
            start_date: new.start_date,
            end_date: new.end_date,
            completed_dates: new.completed_dates,
            created_at: now_string(),
        }
        .prepare(self)?;

        self.chores.push(chore.clone());
        tracing::info!(chore_id = %chore.id, title = %chore.title, recurrence = %chore.recurrence, "Added chore");
        Ok(chore)
    }

    pub fn update_chore(&mut self, id: &str, patch: ChorePatch) -> HouseholdResult<Chore> {
        let index = self.chore_index(id)?;
        let mut draft = self.chores[index].clone();
        patch.apply(&mut draft);
        let chore = draft.prepare(self)?;
        self.chores[index] = chore.clone();
        Ok(chore)
    }

    pub fn remove_chore(&mut self, id: &str) -> HouseholdResult<Chore> {
        let index = self.chore_index(id)?;
        let removed = self.chores.remove(index);
        tracing::info!(chore_id = %id, "Removed chore");
        Ok(removed)
    }

    /// Record a completion on `date`. Completing twice is a no-op.
    pub fn complete_chore(&mut self, id: &str, date: NaiveDate) -> HouseholdResult<CompletionOutcome> {
        let index = self.chore_index(id)?;
        let key = format_calendar_date(date);
        let chore = &mut self.chores[index];
        let is_new = !chore.is_completed_on(&key);

        if is_new {
            chore.completed_dates.push(key.clone());
            if chore.is_treat_heist() {
                let before = self.inventory.treats;
                self.inventory.take_treat();
                tracing::info!(chore_id = %id, before, after = self.inventory.treats, "Treat stolen from the jar");
            }
        }
        tracing::info!(chore_id = %id, date = %key, is_new, "Marked chore complete");

        Ok(CompletionOutcome {
            chore: self.chores[index].clone(),
            inventory: self.inventory.clone(),
        })
    }

    /// Remove every completion recorded on `date`.
    pub fn uncomplete_chore(&mut self, id: &str, date: NaiveDate) -> HouseholdResult<CompletionOutcome> {
        let index = self.chore_index(id)?;
        let key = format_calendar_date(date);
        let chore = &mut self.chores[index];
        let was_completed = chore.is_completed_on(&key);
        chore.completed_dates.retain(|d| d != &key);

        if was_completed && chore.is_treat_heist() {
            let before = self.inventory.treats;
            self.inventory.return_treat();
            tracing::info!(chore_id = %id, before, after = self.inventory.treats, "Treat returned to the jar");
        }
        tracing::info!(chore_id = %id, date = %key, was_completed, "Unmarked chore completion");

        Ok(CompletionOutcome {
            chore: self.chores[index].clone(),
            inventory: self.inventory.clone(),
        })
    }

    fn chore_index(&self, id: &str) -> HouseholdResult<usize> {
        self.chores
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| HouseholdError::chore_not_found(id))
    }
}

#[cfg(test)]
impl Chore {
    pub(crate) fn fixture(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            assigned_to_id: None,
            co_assignee_id: None,
            is_team_task: false,
            recurrence: "none".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: None,
            completed_dates: Vec::new(),
            created_at: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::Member;

    fn household() -> HouseholdData {
        let mut data = HouseholdData::default();
        data.team_members.push(Member::new("m1", "Rex", "dog"));
        data.team_members.push(Member::new("m2", "Tom", "cat"));
        data
    }

    fn new_chore(title: &str) -> NewChore {
        NewChore {
            title: title.to_string(),
            start_date: "2024-06-01".to_string(),
            recurrence: Some("daily".to_string()),
            ..Default::default()
        }
    }

    fn day(s: &str) -> NaiveDate {
        parse_calendar_date(s).unwrap()
    }

    #[test]
    fn add_chore_fills_defaults() {
        let mut data = household();
        let chore = data
            .add_chore(NewChore {
                title: " Feed ".into(),
                start_date: "2024-06-01".into(),
                assigned_to_id: Some("".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(chore.title, "Feed");
        assert_eq!(chore.recurrence, "none");
        assert_eq!(chore.assigned_to_id, None);
        assert!(chore.completed_dates.is_empty());
        assert!(!chore.created_at.is_empty());
    }

    #[test]
    fn add_chore_rejects_bad_input() {
        let mut data = household();

        let err = data.add_chore(new_chore("  ")).unwrap_err();
        assert_eq!(err, HouseholdError::Invalid(ValidationError::EmptyTitle));

        let mut bad_rule = new_chore("Feed");
        bad_rule.recurrence = Some("hourly".into());
        assert!(matches!(
            data.add_chore(bad_rule),
            Err(HouseholdError::Invalid(ValidationError::Schedule(
                ScheduleError::InvalidRecurrence(_)
            )))
        ));

        let mut bad_start = new_chore("Feed");
        bad_start.start_date = "June first".into();
        assert!(matches!(
            data.add_chore(bad_start),
            Err(HouseholdError::Invalid(ValidationError::Schedule(
                ScheduleError::InvalidDate(_)
            )))
        ));

        let mut inverted = new_chore("Feed");
        inverted.end_date = Some("2024-05-01".into());
        assert!(matches!(
            data.add_chore(inverted),
            Err(HouseholdError::Invalid(ValidationError::EndBeforeStart { .. }))
        ));

        let mut stranger = new_chore("Feed");
        stranger.assigned_to_id = Some("ghost".into());
        assert_eq!(
            data.add_chore(stranger),
            Err(HouseholdError::Invalid(ValidationError::UnknownMember("ghost".into())))
        );

        assert!(data.chores.is_empty());
    }

    #[test]
    fn team_chores_need_two_distinct_assignees() {
        let mut data = household();
        let mut team = new_chore("Guard the sofa");
        team.is_team_task = true;
        team.assigned_to_id = Some("m1".into());
        assert_eq!(
            data.add_chore(team.clone()),
            Err(HouseholdError::Invalid(ValidationError::TeamNeedsTwoAssignees))
        );

        team.co_assignee_id = Some("m1".into());
        assert_eq!(
            data.add_chore(team.clone()),
            Err(HouseholdError::Invalid(ValidationError::TeamNeedsTwoAssignees))
        );

        team.co_assignee_id = Some("m2".into());
        let stored = data.add_chore(team).unwrap();
        assert_eq!(stored.assignees().collect::<Vec<_>>(), vec!["m1", "m2"]);
    }

    #[test]
    fn solo_chores_drop_the_co_assignee() {
        let mut data = household();
        let mut solo = new_chore("Nap");
        solo.assigned_to_id = Some("m1".into());
        solo.co_assignee_id = Some("m2".into());
        let stored = data.add_chore(solo).unwrap();
        assert_eq!(stored.co_assignee_id, None);
    }

    #[test]
    fn completed_dates_are_canonical_and_unique() {
        let mut data = household();
        let mut chore = new_chore("Feed");
        chore.completed_dates = vec!["2024-06-02".into(), "2024-06-02".into(), "2024-06-01".into()];
        let stored = data.add_chore(chore).unwrap();
        assert_eq!(stored.completed_dates, vec!["2024-06-02", "2024-06-01"]);
    }

    #[test]
    fn update_chore_merges_and_revalidates() {
        let mut data = household();
        let chore = data.add_chore(new_chore("Feed")).unwrap();

        let patch: ChorePatch =
            serde_json::from_str(r#"{"assignedTo": "m2", "dueDate": "2024-06-30"}"#).unwrap();
        let updated = data.update_chore(&chore.id, patch).unwrap();
        assert_eq!(updated.assigned_to_id.as_deref(), Some("m2"));
        assert_eq!(updated.end_date.as_deref(), Some("2024-06-30"));
        assert_eq!(updated.title, "Feed");

        let patch: ChorePatch = serde_json::from_str(r#"{"recurrence": "yearly"}"#).unwrap();
        assert!(data.update_chore(&chore.id, patch).is_err());
        assert_eq!(data.chore(&chore.id).unwrap().recurrence, "daily");

        let patch: ChorePatch = serde_json::from_str(r#"{"assignedToId": null}"#).unwrap();
        let cleared = data.update_chore(&chore.id, patch).unwrap();
        assert_eq!(cleared.assigned_to_id, None);
    }

    #[test]
    fn completion_is_idempotent() {
        let mut data = household();
        let chore = data.add_chore(new_chore("Feed")).unwrap();

        data.complete_chore(&chore.id, day("2024-06-03")).unwrap();
        let outcome = data.complete_chore(&chore.id, day("2024-06-03")).unwrap();
        assert_eq!(outcome.chore.completed_dates, vec!["2024-06-03"]);

        let outcome = data.uncomplete_chore(&chore.id, day("2024-06-03")).unwrap();
        assert!(outcome.chore.completed_dates.is_empty());
    }

    #[test]
    fn treat_heists_move_treats() {
        let mut data = household();
        let heist = data.add_chore(new_chore("Steal treats from the jar")).unwrap();
        let honest = data.add_chore(new_chore("Feed")).unwrap();

        let outcome = data.complete_chore(&heist.id, day("2024-06-01")).unwrap();
        assert_eq!(outcome.inventory.treats, 99);
        let outcome = data.complete_chore(&heist.id, day("2024-06-01")).unwrap();
        assert_eq!(outcome.inventory.treats, 99, "repeat completion steals nothing");

        data.complete_chore(&honest.id, day("2024-06-01")).unwrap();
        assert_eq!(data.inventory.treats, 99);

        let outcome = data.uncomplete_chore(&heist.id, day("2024-06-02")).unwrap();
        assert_eq!(outcome.inventory.treats, 99, "nothing to return for an uncompleted date");
        let outcome = data.uncomplete_chore(&heist.id, day("2024-06-01")).unwrap();
        assert_eq!(outcome.inventory.treats, 100);
    }

    #[test]
    fn missing_chore_is_not_found() {
        let mut data = household();
        assert_eq!(
            data.complete_chore("nope", day("2024-06-01")).unwrap_err(),
            HouseholdError::chore_not_found("nope")
        );
        assert!(data.remove_chore("nope").is_err());
    }
}
