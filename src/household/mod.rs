//! Household state: members, chores, reviews, treat inventory and settings.
//!
//! `HouseholdData` is the whole persisted document. Its methods are the only
//! writers of household state; each validates its input before touching
//! anything, so a rejected request leaves the document unchanged.
//!
//! # Invariants
//! - Member, chore and review ids are unique within their collection.
//! - No chore references a member id that is not in `team_members`.
//! - `completed_dates` never holds the same date twice.
//! - A team chore has two distinct assignees; a solo chore has no co-assignee.

pub mod chore;
pub mod inventory;
pub mod member;
pub mod review;
pub mod settings;

pub use chore::{Chore, ChorePatch, CompletionOutcome, NewChore};
pub use inventory::{Inventory, InventoryPatch};
pub use member::{Member, MemberPatch, NewMember};
pub use review::{NewReview, Review, ReviewPatch};
pub use settings::Settings;

use serde::{Deserialize, Serialize};

use crate::schedule::ScheduleError;

/// The persisted household document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdData {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub team_members: Vec<Member>,
    #[serde(default)]
    pub chores: Vec<Chore>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub inventory: Inventory,
}

impl HouseholdData {
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.team_members.iter().find(|m| m.id == id)
    }

    pub fn chore(&self, id: &str) -> Option<&Chore> {
        self.chores.iter().find(|c| c.id == id)
    }

    pub fn review(&self, id: &str) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id == id)
    }

    pub(crate) fn has_member(&self, id: &str) -> bool {
        self.member(id).is_some()
    }
}

/// Input that a household write refuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Comment cannot be empty")]
    EmptyComment,

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("End date {end} is before start date {start}")]
    EndBeforeStart { start: String, end: String },

    #[error("Team chores need two distinct assignees")]
    TeamNeedsTwoAssignees,

    #[error("Unknown team member: {0}")]
    UnknownMember(String),

    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Errors returned by `HouseholdData` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HouseholdError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl HouseholdError {
    pub(crate) fn member_not_found(id: &str) -> Self {
        Self::NotFound {
            kind: "Team member",
            id: id.to_string(),
        }
    }

    pub(crate) fn chore_not_found(id: &str) -> Self {
        Self::NotFound {
            kind: "Chore",
            id: id.to_string(),
        }
    }

    pub(crate) fn review_not_found(id: &str) -> Self {
        Self::NotFound {
            kind: "Review",
            id: id.to_string(),
        }
    }
}

pub type HouseholdResult<T> = Result<T, HouseholdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_deserializes_to_defaults() {
        let data: HouseholdData = serde_json::from_str("{}").unwrap();
        assert!(data.team_members.is_empty());
        assert!(data.chores.is_empty());
        assert_eq!(data.settings.calendar_name, "Office Chores Manager");
        assert_eq!(data.inventory.treats, 100);
    }

    #[test]
    fn legacy_document_loads() {
        let raw = r#"{
            "settings": { "calendarName": "Kennel Duties", "theme": "dark" },
            "teamMembers": [
                { "id": "1", "name": "Rex", "species": "dog" },
                { "id": "2", "name": "Tom", "species": "cat" }
            ],
            "chores": [{
                "id": "10",
                "title": "Walk",
                "assignedTo": "1",
                "coAssignee": "2",
                "isGuild": true,
                "isHeist": false,
                "recurrence": "daily",
                "startDate": "2024-06-01",
                "dueDate": null,
                "completedDates": ["2024-06-01"]
            }],
            "reviews": [],
            "inventory": { "treats": 42, "maxTreats": 100, "lastUpdated": "2024-06-01T00:00:00Z" }
        }"#;
        let data: HouseholdData = serde_json::from_str(raw).unwrap();
        let walk = data.chore("10").unwrap();
        assert_eq!(walk.assigned_to_id.as_deref(), Some("1"));
        assert_eq!(walk.co_assignee_id.as_deref(), Some("2"));
        assert!(walk.is_team_task);
        assert_eq!(walk.end_date, None);
        assert_eq!(data.inventory.treats, 42);
        assert_eq!(
            data.settings.extra.get("theme"),
            Some(&serde_json::json!("dark"))
        );

        let saved = serde_json::to_value(&data).unwrap();
        assert_eq!(saved["chores"][0]["assignedToId"], "1");
        assert_eq!(saved["chores"][0]["isTeamTask"], true);
        assert_eq!(saved["settings"]["theme"], "dark");
    }
}
