//! The treat jar.

use serde::{Deserialize, Serialize};

use super::HouseholdData;
use crate::util::now_string;

const DEFAULT_TREATS: u32 = 100;

/// Treat jar contents.
///
/// # Invariants
/// - `treats <= max_treats` after every operation on this type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    #[serde(default = "default_max_treats")]
    pub treats: u32,
    #[serde(default = "default_max_treats")]
    pub max_treats: u32,
    #[serde(default)]
    pub last_updated: String,
}

fn default_max_treats() -> u32 {
    DEFAULT_TREATS
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            treats: DEFAULT_TREATS,
            max_treats: DEFAULT_TREATS,
            last_updated: now_string(),
        }
    }
}

impl Inventory {
    fn touch(&mut self) {
        self.last_updated = now_string();
    }

    pub(crate) fn take_treat(&mut self) {
        self.treats = self.treats.saturating_sub(1);
        self.touch();
    }

    pub(crate) fn return_treat(&mut self) {
        self.treats = (self.treats + 1).min(self.max_treats);
        self.touch();
    }

    pub(crate) fn refill(&mut self) {
        self.treats = self.max_treats;
        self.touch();
    }
}

/// Requested jar changes. `treats` may be out of range; it is clamped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPatch {
    pub treats: Option<i64>,
    pub max_treats: Option<u32>,
}

impl HouseholdData {
    /// Apply a jar update. A new capacity applies first, then the treat
    /// count is clamped into `0..=max_treats`.
    pub fn update_inventory(&mut self, patch: InventoryPatch) -> Inventory {
        let jar = &mut self.inventory;
        if let Some(max) = patch.max_treats {
            jar.max_treats = max;
        }
        let requested = patch.treats.unwrap_or(i64::from(jar.treats));
        jar.treats = requested.clamp(0, i64::from(jar.max_treats)) as u32;
        jar.touch();
        jar.clone()
    }

    pub fn refill_inventory(&mut self) -> Inventory {
        self.inventory.refill();
        self.inventory.clone()
    }

    /// Recount the jar from scratch: capacity minus every recorded
    /// completion of a treat-heist chore.
    pub fn sync_inventory(&mut self) -> Inventory {
        let stolen: usize = self
            .chores
            .iter()
            .filter(|c| c.is_treat_heist())
            .map(|c| c.completed_dates.len())
            .sum();
        let stolen = u32::try_from(stolen).unwrap_or(u32::MAX);
        self.inventory.treats = self.inventory.max_treats.saturating_sub(stolen);
        self.inventory.touch();
        tracing::info!(stolen, treats = self.inventory.treats, "Synced treat inventory");
        self.inventory.clone()
    }
}
