//! Team members (the pets doing the chores).

use serde::{Deserialize, Serialize};

use super::{HouseholdData, HouseholdError, HouseholdResult, ValidationError};
use crate::util::{double_option, new_id, non_empty, now_string, null_default};

fn default_species() -> String {
    "dog".to_string()
}

/// A household member chores can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    /// Avatar colour id (e.g. "blue", "teal")
    #[serde(default)]
    pub avatar: Option<String>,
    /// Photo as a data URL
    #[serde(default)]
    pub photo: Option<String>,
    /// Flavour only: drives review templates, never scheduling
    #[serde(default = "default_species", deserialize_with = "null_default")]
    pub species: String,
    #[serde(default, deserialize_with = "null_default")]
    pub created_at: String,
}

impl Member {
    pub fn new(id: impl Into<String>, name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            avatar: None,
            photo: None,
            species: species.into(),
            created_at: now_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
}

/// Partial update; `null` clears the nullable fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub avatar: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub photo: Option<Option<String>>,
    pub species: Option<String>,
}

impl HouseholdData {
    pub fn add_member(&mut self, new: NewMember) -> HouseholdResult<Member> {
        let name = new.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        let member = Member {
            id: new_id(),
            name,
            email: new.email.unwrap_or_default(),
            avatar: non_empty(new.avatar),
            photo: non_empty(new.photo),
            species: non_empty(new.species).unwrap_or_else(default_species),
            created_at: now_string(),
        };
        self.team_members.push(member.clone());
        tracing::info!(member_id = %member.id, name = %member.name, "Added team member");
        Ok(member)
    }

    pub fn update_member(&mut self, id: &str, patch: MemberPatch) -> HouseholdResult<Member> {
        let member = self
            .team_members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| HouseholdError::member_not_found(id))?;

        if let Some(name) = patch.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(ValidationError::EmptyName.into());
            }
            member.name = name;
        }
        if let Some(email) = patch.email {
            member.email = email;
        }
        if let Some(avatar) = patch.avatar {
            member.avatar = non_empty(avatar);
        }
        if let Some(photo) = patch.photo {
            member.photo = non_empty(photo);
        }
        if let Some(species) = non_empty(patch.species) {
            member.species = species;
        }
        Ok(member.clone())
    }

    /// Remove a member and unassign them from every chore.
    ///
    /// A team chore that loses one of its two assignees becomes a solo chore
    /// for the remaining one.
    pub fn remove_member(&mut self, id: &str) -> HouseholdResult<Member> {
        let index = self
            .team_members
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| HouseholdError::member_not_found(id))?;
        let removed = self.team_members.remove(index);

        let mut unassigned = 0usize;
        for chore in &mut self.chores {
            if chore.unassign(id) {
                unassigned += 1;
            }
        }
        tracing::info!(member_id = %id, unassigned, "Removed team member");
        Ok(removed)
    }
}
