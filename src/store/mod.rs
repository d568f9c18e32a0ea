//! Household storage with pluggable persistence backends.
//!
//! Supports:
//! - `memory`: nothing is written anywhere (tests, demos)
//! - `file`: the whole document as one JSON file, rewritten on every change

mod file;
mod memory;

pub use file::FilePersistence;
pub use memory::MemoryPersistence;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::household::{HouseholdData, HouseholdError};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Household(#[from] HouseholdError),

    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize household data: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Where the household document lives between restarts.
#[async_trait]
pub trait Persistence: Send + Sync {
    /// Whether saved data survives a restart.
    fn is_persistent(&self) -> bool;

    /// Load the stored document, creating a default one if there is none.
    async fn load(&self) -> StoreResult<HouseholdData>;

    /// Replace the stored document.
    async fn save(&self, data: &HouseholdData) -> StoreResult<()>;
}

/// The live household document plus its backend.
///
/// Writers are serialised by the lock. Each write runs against a copy of
/// the document; the copy only replaces the live state once it has been
/// saved, so a rejected or failed write changes nothing.
pub struct HouseholdStore {
    data: RwLock<HouseholdData>,
    persistence: Box<dyn Persistence>,
}

impl HouseholdStore {
    pub async fn open(persistence: Box<dyn Persistence>) -> StoreResult<Self> {
        let data = persistence.load().await?;
        tracing::info!(
            persistent = persistence.is_persistent(),
            members = data.team_members.len(),
            chores = data.chores.len(),
            reviews = data.reviews.len(),
            "Household store opened"
        );
        Ok(Self {
            data: RwLock::new(data),
            persistence,
        })
    }

    /// Open the backend selected by `config`.
    pub async fn from_config(config: &Config) -> StoreResult<Self> {
        if config.in_memory {
            return Self::open(Box::new(MemoryPersistence::new())).await;
        }
        Self::open(Box::new(FilePersistence::new(config.data_file.clone()))).await
    }

    /// A non-persistent store seeded with `data`.
    pub fn in_memory(data: HouseholdData) -> Self {
        Self {
            data: RwLock::new(data),
            persistence: Box::new(MemoryPersistence::new()),
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.persistence.is_persistent()
    }

    /// Snapshot of the whole document.
    pub async fn read(&self) -> HouseholdData {
        self.data.read().await.clone()
    }

    /// Run `f` against a borrowed view of the document.
    pub async fn view<T>(&self, f: impl FnOnce(&HouseholdData) -> T) -> T {
        f(&*self.data.read().await)
    }

    /// Apply `f` to a copy of the document, persist it, then publish it.
    pub async fn mutate<T, F>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut HouseholdData) -> Result<T, HouseholdError>,
    {
        let mut live = self.data.write().await;
        let mut draft = live.clone();
        let value = f(&mut draft)?;
        self.persistence.save(&draft).await?;
        *live = draft;
        Ok(value)
    }
}
